// Copyright @yucwang 2026

use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::materials::{reflect, reflectance, refract};
use crate::math::constants::{Float, Vector3f};

/// Refractive glass. Reflect/refract is chosen by Schlick reflectance
/// sampled against a uniform draw; total internal reflection forces the
/// reflect branch.
pub struct Dielectric {
    ior: Float,
    tint: Vector3f,
}

impl Dielectric {
    pub fn new(ior: Float, tint: Vector3f) -> Self {
        Self { ior, tint }
    }

    pub fn ior(&self) -> Float {
        self.ior
    }

    pub fn scatter(&self, wi: &Vector3f, _p: &Vector3f, n: &Vector3f,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        let unit_direction = wi.normalize();
        let front_face = unit_direction.dot(n) < 0.0;
        let (outward_normal, eta) = if front_face {
            (*n, 1.0 / self.ior)
        } else {
            (-n, self.ior)
        };

        let cos_theta = (-unit_direction).dot(&outward_normal).min(1.0);
        let reflect_prob = reflectance(cos_theta, eta);

        let direction = match refract(&unit_direction, &outward_normal, eta) {
            Some(refracted) if reflect_prob <= rng.next_f32() => refracted,
            _ => reflect(&unit_direction, &outward_normal),
        };

        Some(ScatterRecord::new(self.tint, direction))
    }
}
