// Copyright @yucwang 2026

use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::materials::reflect;
use crate::math::constants::Vector3f;

/// Perfect specular reflector with an optional tint.
pub struct Mirror {
    tint: Vector3f,
}

impl Mirror {
    pub fn new(tint: Vector3f) -> Self {
        Self { tint }
    }

    pub fn scatter(&self, wi: &Vector3f, _p: &Vector3f, n: &Vector3f,
                   _rng: &mut LcgRng) -> Option<ScatterRecord> {
        let direction = reflect(&wi.normalize(), n);
        Some(ScatterRecord::new(self.tint, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_reflects_about_normal() {
        let material = Mirror::new(Vector3f::new(1.0, 1.0, 1.0));
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let wi = Vector3f::new(1.0, -2.0, 0.0);
        let mut rng = LcgRng::new(1);
        let record = material.scatter(&wi, &Vector3f::zeros(), &n, &mut rng).unwrap();
        let expected = Vector3f::new(1.0, 2.0, 0.0).normalize();
        assert!((record.direction - expected).norm() < 1e-5);
    }
}
