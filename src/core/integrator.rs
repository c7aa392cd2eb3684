// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::{Vector2f, Vector3f};
use crate::sensors::perspective::PerspectiveCamera;

pub trait Integrator: Sync {
    /// Estimate radiance through the normalized screen point `uv`.
    fn trace_ray_forward(&self, scene: &Scene, camera: &PerspectiveCamera,
                         uv: Vector2f, rng: &mut LcgRng) -> Vector3f;
    fn samples_per_pixel(&self) -> u32;
}
