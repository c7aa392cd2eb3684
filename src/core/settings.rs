// Copyright @yucwang 2026

use crate::math::constants::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenoiseFilter {
    Box,
    Gaussian,
    Bilateral,
}

#[derive(Debug, Clone, Copy)]
pub struct DenoiseSettings {
    pub filter: DenoiseFilter,
    pub strength: Float,
    // When set, the filter runs on the tone-mapped buffer instead of the
    // linear one.
    pub after_tonemap: bool,
}

impl DenoiseSettings {
    pub fn new(filter: DenoiseFilter, strength: Float) -> Self {
        Self { filter, strength, after_tonemap: false }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub gamma: Float,
    pub ambient_light: Float,
    pub field_of_view: Float,
    pub aperture: Float,
    pub focus_distance: Float,
    pub seed: u64,
    pub denoise: Option<DenoiseSettings>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            samples_per_pixel: 64,
            max_depth: 50,
            gamma: 2.2,
            ambient_light: 1.0,
            field_of_view: 45.0,
            aperture: 0.0,
            focus_distance: 10.0,
            seed: 0,
            denoise: None,
        }
    }
}

impl RenderSettings {
    pub fn aspect_ratio(&self) -> Float {
        self.width as Float / self.height as Float
    }
}
