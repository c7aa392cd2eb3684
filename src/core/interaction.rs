// Copyright @yucwang 2026

use crate::materials::Material;
use crate::math::constants::{Float, Vector3f};
use std::sync::Arc;

pub struct SurfaceIntersection {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    material: Arc<Material>,
}

impl SurfaceIntersection {
    pub fn new(new_p: Vector3f,
               new_normal: Vector3f,
               new_t: Float,
               new_material: Arc<Material>) -> Self {
        Self { p: new_p, normal: new_normal, t: new_t, material: new_material }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn material(&self) -> &Material {
        self.material.as_ref()
    }
}
