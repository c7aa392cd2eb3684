// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector3f};

// ACES-style rational filmic curve (Narkowicz fit).
const ACES_A: Float = 2.51;
const ACES_B: Float = 0.03;
const ACES_C: Float = 2.43;
const ACES_D: Float = 0.59;
const ACES_E: Float = 0.14;

/// Compress unbounded linear radiance into [0, 1].
pub fn filmic(color: &Vector3f) -> Vector3f {
    let mut out = Vector3f::zeros();
    for idx in 0..3 {
        let x = color[idx];
        let mapped = (x * (ACES_A * x + ACES_B)) / (x * (ACES_C * x + ACES_D) + ACES_E);
        out[idx] = mapped.max(0.0).min(1.0);
    }
    out
}

/// Display transfer. Applied after tone mapping, never before.
pub fn gamma_correct(color: &Vector3f, gamma: Float) -> Vector3f {
    let inv_gamma = 1.0 / gamma;
    Vector3f::new(color.x.powf(inv_gamma),
                  color.y.powf(inv_gamma),
                  color.z.powf(inv_gamma))
}

pub fn tonemap_bitmap(bitmap: &mut Bitmap, gamma: Float) {
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let mapped = filmic(&bitmap[(x, y)]);
            bitmap[(x, y)] = gamma_correct(&mapped, gamma);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filmic_maps_into_unit_range() {
        for x in [0.0, 0.1, 0.5, 1.0, 4.0, 100.0, 1e6] {
            let mapped = filmic(&Vector3f::new(x, x, x));
            for idx in 0..3 {
                assert!(mapped[idx] >= 0.0 && mapped[idx] <= 1.0);
            }
        }
    }

    #[test]
    fn test_filmic_black_stays_black() {
        assert_eq!(filmic(&Vector3f::zeros()), Vector3f::zeros());
    }

    #[test]
    fn test_filmic_monotonic() {
        let mut previous = -1.0;
        for step in 0..64 {
            let x = step as Float * 0.25;
            let mapped = filmic(&Vector3f::new(x, x, x)).x;
            assert!(mapped >= previous);
            previous = mapped;
        }
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        let c = Vector3f::new(0.25, 0.25, 0.25);
        let corrected = gamma_correct(&c, 2.2);
        assert!(corrected.x > 0.25);
        assert!(corrected.x <= 1.0);
    }

    #[test]
    fn test_tonemap_bitmap_in_place() {
        let mut bitmap = Bitmap::new(4, 2);
        bitmap[(1, 1)] = Vector3f::new(10.0, 0.5, 0.0);
        tonemap_bitmap(&mut bitmap, 2.2);
        for pixel in bitmap.data() {
            for idx in 0..3 {
                assert!(pixel[idx] >= 0.0 && pixel[idx] <= 1.0);
            }
        }
    }
}
