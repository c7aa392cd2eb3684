// Copyright 2026 @TwoCookingMice

pub mod bitmap;
pub mod constants;
pub mod ray;
pub mod vector;
pub mod warp;
