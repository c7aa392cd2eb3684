// Copyright @yucwang 2026

use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector3f};

/// Pure light source. Absorbs every incoming ray; contributes only through
/// its emitted term.
pub struct Emissive {
    color: Vector3f,
    strength: Float,
}

impl Emissive {
    pub fn new(color: Vector3f, strength: Float) -> Self {
        Self { color, strength }
    }

    pub fn scatter(&self, _wi: &Vector3f, _p: &Vector3f, _n: &Vector3f,
                   _rng: &mut LcgRng) -> Option<ScatterRecord> {
        None
    }

    pub fn emitted(&self) -> Vector3f {
        self.color * self.strength
    }
}
