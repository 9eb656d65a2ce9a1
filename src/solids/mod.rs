// Copyright @yucwang 2023

pub mod composite;
pub mod cuboid;
pub mod mesh;
pub mod quad;
pub mod sphere;
