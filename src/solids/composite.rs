// Copyright @yucwang 2023

use crate::core::solid::{ Solid, SolidBase };
use crate::math::constants::Vector3f;

/// A solid made of the primitives of other solids.
///
/// Primitives are shared with the source solids, not copied, so transforming
/// the composite also moves them in every source.
pub struct CompositeSolid {
    base: SolidBase,
}

impl Solid for CompositeSolid {
    fn base(&self) -> &SolidBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SolidBase {
        &mut self.base
    }
}

impl CompositeSolid {
    pub fn new(pivot: Vector3f) -> Self {
        Self { base: SolidBase::with_pivot(pivot) }
    }

    pub fn from_solids(pivot: Vector3f, solids: &[&dyn Solid]) -> Self {
        let mut composite = Self::new(pivot);
        for solid in solids {
            composite.add(*solid);
        }
        composite
    }

    pub fn add(&mut self, solid: &dyn Solid) {
        self.base.add_solid(solid);
    }
}
