// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};
use crate::math::vector::normalize_safe;

// Effectively infinite, so shadow tests against real geometry never
// terminate early on the light distance.
const SUN_DISTANCE: Float = 1e10;

/// Sun-style light: parallel rays arriving from a fixed direction, no
/// falloff with distance.
pub struct DirectionalLight {
    direction: Vector3f,
    pub color: Vector3f,
    pub intensity: Float,
}

impl DirectionalLight {
    /// `direction` is the direction FROM which the light arrives.
    pub fn new(direction: Vector3f, color: Vector3f, intensity: Float) -> Self {
        Self { direction: normalize_safe(&direction), color, intensity }
    }

    pub fn direction_from(&self, _point: &Vector3f) -> Vector3f {
        -self.direction
    }

    pub fn distance_from(&self, _point: &Vector3f) -> Float {
        SUN_DISTANCE
    }

    pub fn illumination(&self, _point: &Vector3f) -> Vector3f {
        self.color * self.intensity
    }
}
