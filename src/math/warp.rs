// Copyright @yucwang 2026

use super::constants::{Float, Vector2f, Vector3f, PI};
use crate::core::rng::LcgRng;

/// Rejection-sample a point strictly inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut LcgRng) -> Vector3f {
    loop {
        let p = Vector3f::new(rng.next_f32() * 2.0 - 1.0,
                              rng.next_f32() * 2.0 - 1.0,
                              rng.next_f32() * 2.0 - 1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

pub fn random_unit_vector(rng: &mut LcgRng) -> Vector3f {
    random_in_unit_sphere(rng).normalize()
}

/// Polar sample on the unit disk: phi = 2*pi*u, r = sqrt(u).
pub fn random_in_unit_disk(rng: &mut LcgRng) -> Vector2f {
    let phi = 2.0 * PI * rng.next_f32();
    let r: Float = rng.next_f32().sqrt();
    Vector2f::new(r * phi.cos(), r * phi.sin())
}
