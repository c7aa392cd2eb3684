// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// Normalize that maps the zero vector to the zero vector instead of NaN.
pub fn normalize_safe(v: &Vector3f) -> Vector3f {
    let len = v.norm();
    if len <= 0.0 {
        Vector3f::zeros()
    } else {
        v / len
    }
}

pub fn lerp(a: &Vector3f, b: &Vector3f, t: Float) -> Vector3f {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_safe_unit_length() {
        let v = Vector3f::new(3.0, -4.0, 12.0);
        let n = normalize_safe(&v);
        assert!((n.norm_squared() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_safe_zero_vector() {
        let n = normalize_safe(&Vector3f::zeros());
        assert_eq!(n, Vector3f::zeros());
        assert!(n.x.is_finite() && n.y.is_finite() && n.z.is_finite());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vector3f::new(1.0, 1.0, 1.0);
        let b = Vector3f::new(0.5, 0.7, 1.0);
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);
    }
}
