// Copyright @yucwang 2026

use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;
use crate::sensors::perspective::PerspectiveCamera;

pub trait Renderer {
    fn render(&self, scene: &Scene, camera: &PerspectiveCamera) -> Bitmap;
}
