// Copyright @yucwang 2026

use crate::math::constants::Vector3f;

// A successful scatter: the multiplicative color carried along the
// outgoing ray, and the outgoing direction itself (unit length).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterRecord {
    pub attenuation: Vector3f,
    pub direction: Vector3f,
}

impl ScatterRecord {
    pub fn new(attenuation: Vector3f, direction: Vector3f) -> Self {
        Self { attenuation, direction }
    }
}
