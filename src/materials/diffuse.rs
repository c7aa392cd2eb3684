// Copyright @yucwang 2026

use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::math::constants::{Vector3f, EPSILON};
use crate::math::warp::random_unit_vector;

/// Lambertian surface: bounce into the hemisphere around the normal.
pub struct Diffuse {
    albedo: Vector3f,
}

impl Diffuse {
    pub fn new(albedo: Vector3f) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Vector3f {
        self.albedo
    }

    pub fn scatter(&self, _wi: &Vector3f, _p: &Vector3f, n: &Vector3f,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        let mut direction = n + random_unit_vector(rng);

        // Near-cancelling sum degenerates; fall back to the normal.
        if direction.norm_squared() < EPSILON * EPSILON {
            direction = *n;
        } else {
            direction = direction.normalize();
        }

        Some(ScatterRecord::new(self.albedo, direction))
    }
}
