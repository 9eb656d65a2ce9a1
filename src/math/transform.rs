// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Matrix4f, Vector3f };

use std::ops::Mul;

/// An affine transformation together with its cached inverse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform { matrix: self.matrix * rhs.matrix,
                    inv_matrix: rhs.inv_matrix * self.inv_matrix }
    }
}

impl Transform {
    pub fn new(matrix: Matrix4f) -> Self {
        Self { matrix: matrix,
               inv_matrix: matrix.try_inverse().unwrap_or(Matrix4f::identity())}
    }

    pub fn translate(t: &Vector3f) -> Self {
        Self { matrix: Matrix4f::new_translation(t),
               inv_matrix: Matrix4f::new_translation(&(-t)) }
    }

    pub fn scale(s: &Vector3f) -> Self {
        Self::new(Matrix4f::new_nonuniform_scaling(s))
    }

    /// Rotation about `axis` through the origin, angle in degrees.
    pub fn rotate(axis: &Vector3f, degrees: Float) -> Self {
        let norm = axis.norm();
        if norm == 0.0 {
            return Self::default();
        }
        let scaled_axis = axis * (degrees.to_radians() / norm);
        let matrix = Matrix4f::new_rotation(scaled_axis);
        Self { matrix: matrix, inv_matrix: matrix.transpose() }
    }

    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    pub fn inverse(&self) -> Transform {
        Transform { matrix: self.inv_matrix, inv_matrix: self.matrix }
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        let x = p[0] * self.matrix[(0, 0)] + p[1] * self.matrix[(0, 1)] + 
            p[2] * self.matrix[(0, 2)] + self.matrix[(0, 3)];
        let y = p[0] * self.matrix[(1, 0)] + p[1] * self.matrix[(1, 1)] + 
            p[2] * self.matrix[(1, 2)] + self.matrix[(1, 3)];
        let z = p[0] * self.matrix[(2, 0)] + p[1] * self.matrix[(2, 1)] + 
            p[2] * self.matrix[(2, 2)] + self.matrix[(2, 3)];
        let w = p[0] * self.matrix[(3, 0)] + p[1] * self.matrix[(3, 1)] + 
            p[2] * self.matrix[(3, 2)] + self.matrix[(3, 3)];

        if w == 1.0 {
            Vector3f::new(x, y, z)
        } else {
            Vector3f::new(x / w, y / w, z / w)
        }
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        let x = v[0] * self.matrix[(0, 0)] + v[1] * self.matrix[(0, 1)] + v[2] * self.matrix[(0, 2)];
        let y = v[0] * self.matrix[(1, 0)] + v[1] * self.matrix[(1, 1)] + v[2] * self.matrix[(1, 2)];
        let z = v[0] * self.matrix[(2, 0)] + v[1] * self.matrix[(2, 1)] + v[2] * self.matrix[(2, 2)];

        Vector3f::new(x, y, z)
    }

    // Normals do not transform like points.
    // Before transformation, we have n^Tx = 0
    // After transformation, we have (Sn)^T(Mx) = 0
    // Then, we will get: S = (M^{-1})^T
    pub fn apply_normal(&self, n: Vector3f) -> Vector3f {
        let inv = &self.inv_matrix;
        let x = n[0] * inv[(0, 0)] + n[1] * inv[(1, 0)] + n[2] * inv[(2, 0)];
        let y = n[0] * inv[(0, 1)] + n[1] * inv[(1, 1)] + n[2] * inv[(2, 1)];
        let z = n[0] * inv[(0, 2)] + n[1] * inv[(1, 2)] + n[2] * inv[(2, 2)];

        Vector3f::new(x, y, z)
    }

    /// Translation part of the matrix (column 3, rows 0..3).
    pub fn translation(&self) -> Vector3f {
        Vector3f::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }
}
