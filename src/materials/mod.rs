// Copyright @yucwang 2026

pub mod dielectric;
pub mod diffuse;
pub mod emissive;
pub mod metal;
pub mod mirror;

use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector3f};

use self::dielectric::Dielectric;
use self::diffuse::Diffuse;
use self::emissive::Emissive;
use self::metal::Metal;
use self::mirror::Mirror;

// Closed set of surface scattering models. Stateless apart from the shared
// random stream, so one instance can serve any number of surfaces across
// worker threads.
pub enum Material {
    Diffuse(Diffuse),
    Metal(Metal),
    Dielectric(Dielectric),
    Mirror(Mirror),
    Emissive(Emissive),
}

impl Material {
    /// Decide whether the incoming ray continues, and with what attenuation
    /// and outgoing direction. `None` means the ray was absorbed.
    pub fn scatter(&self, wi: &Vector3f, p: &Vector3f, n: &Vector3f,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        match self {
            Material::Diffuse(diffuse) => diffuse.scatter(wi, p, n, rng),
            Material::Metal(metal) => metal.scatter(wi, p, n, rng),
            Material::Dielectric(dielectric) => dielectric.scatter(wi, p, n, rng),
            Material::Mirror(mirror) => mirror.scatter(wi, p, n, rng),
            Material::Emissive(emissive) => emissive.scatter(wi, p, n, rng),
        }
    }

    /// Radiance added at the hit point regardless of the scatter outcome.
    pub fn emitted(&self) -> Vector3f {
        match self {
            Material::Emissive(emissive) => emissive.emitted(),
            _ => Vector3f::zeros(),
        }
    }
}

pub fn reflect(v: &Vector3f, n: &Vector3f) -> Vector3f {
    v - n * (2.0 * v.dot(n))
}

// `v` and `n` are unit length with `n` oriented against `v`. Returns None
// when Snell's law has no real solution (total internal reflection).
pub fn refract(v: &Vector3f, n: &Vector3f, eta: Float) -> Option<Vector3f> {
    let cos_theta = (-v).dot(n).min(1.0);
    let r_out_perp = (v + n * cos_theta) * eta;
    let r_out_parallel_sq = 1.0 - r_out_perp.norm_squared();
    if r_out_parallel_sq > 0.0 {
        let r_out_parallel = n * -r_out_parallel_sq.sqrt();
        Some(r_out_perp + r_out_parallel)
    } else {
        None
    }
}

/// Schlick's approximation of the Fresnel reflectance.
pub fn reflectance(cosine: Float, eta: Float) -> Float {
    let mut r0 = (1.0 - eta) / (1.0 + eta);
    r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
