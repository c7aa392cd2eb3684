/* Copyright 2026 @Yuchen Wong */

pub type Float = f32;
pub type Int = i32;

pub type Vector2f = nalgebra::Vector2<Float>;
pub type Vector3f = nalgebra::Vector3<Float>;

// Minimum valid hit distance, also the ray-origin offset applied after a
// bounce so that secondary rays do not re-hit the surface they left.
pub const EPSILON: Float = 1e-3;
pub const PI: Float = 3.14159265359;
pub const INV_PI: Float = 0.31830988618;
