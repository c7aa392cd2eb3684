// Copyright @yucwang 2026

use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::materials::reflect;
use crate::math::constants::{Float, Vector3f};
use crate::math::warp::random_in_unit_sphere;

/// Glossy reflector. Roughness perturbs the mirror direction; rays pushed
/// below the surface are absorbed.
pub struct Metal {
    albedo: Vector3f,
    roughness: Float,
}

impl Metal {
    pub fn new(albedo: Vector3f, roughness: Float) -> Self {
        Self { albedo, roughness: roughness.min(1.0) }
    }

    pub fn albedo(&self) -> Vector3f {
        self.albedo
    }

    pub fn roughness(&self) -> Float {
        self.roughness
    }

    pub fn scatter(&self, wi: &Vector3f, _p: &Vector3f, n: &Vector3f,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        let reflected = reflect(&wi.normalize(), n);
        let direction = (reflected + random_in_unit_sphere(rng) * self.roughness).normalize();

        if direction.dot(n) > 0.0 {
            Some(ScatterRecord::new(self.albedo, direction))
        } else {
            None
        }
    }
}
