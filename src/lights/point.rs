// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};
use crate::math::vector::normalize_safe;

// Additive guard so illumination stays finite at zero distance.
const FALLOFF_EPSILON: Float = 1e-4;

pub struct PointLight {
    pub position: Vector3f,
    pub color: Vector3f,
    pub intensity: Float,
}

impl PointLight {
    pub fn new(position: Vector3f, color: Vector3f, intensity: Float) -> Self {
        Self { position, color, intensity }
    }

    pub fn direction_from(&self, point: &Vector3f) -> Vector3f {
        normalize_safe(&(self.position - point))
    }

    pub fn distance_from(&self, point: &Vector3f) -> Float {
        (self.position - point).norm()
    }

    /// Inverse-square falloff.
    pub fn illumination(&self, point: &Vector3f) -> Vector3f {
        let distance_sq = (self.position - point).norm_squared();
        let falloff = self.intensity / (distance_sq + FALLOFF_EPSILON);
        self.color * falloff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_direction_and_distance() {
        let light = PointLight::new(Vector3f::new(0.0, 4.0, 0.0),
                                    Vector3f::new(1.0, 1.0, 1.0), 10.0);
        let p = Vector3f::zeros();
        assert!((light.direction_from(&p) - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-6);
        assert!((light.distance_from(&p) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_light_inverse_square_falloff() {
        let light = PointLight::new(Vector3f::zeros(), Vector3f::new(1.0, 1.0, 1.0), 8.0);
        let near = light.illumination(&Vector3f::new(1.0, 0.0, 0.0));
        let far = light.illumination(&Vector3f::new(2.0, 0.0, 0.0));
        assert!((near.x / far.x - 4.0).abs() < 1e-2);
    }

    #[test]
    fn test_point_light_finite_at_source() {
        let light = PointLight::new(Vector3f::zeros(), Vector3f::new(1.0, 1.0, 1.0), 1.0);
        let illumination = light.illumination(&Vector3f::zeros());
        assert!(illumination.x.is_finite());
    }
}
