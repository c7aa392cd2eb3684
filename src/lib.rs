// Copyright 2026 TwoCookingMice

#![allow(dead_code)]

pub extern crate nalgebra as na;

pub mod core;
pub mod integrators;
pub mod io;
pub mod lights;
pub mod materials;
pub mod math;
pub mod post;
pub mod renderers;
pub mod sensors;
pub mod shapes;
