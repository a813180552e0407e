/// Magnitud máxima aceptada para un descriptor.
pub const DESCRIPTOR_LIMIT: f64 = 100_000.0;

/// NaN/±∞ → 0; fuera de [-LIMIT, LIMIT] → 0 (no se recorta al borde).
pub fn sanitize_value(v: f64) -> f64 {
    if !v.is_finite() || !(-DESCRIPTOR_LIMIT..=DESCRIPTOR_LIMIT).contains(&v) {
        0.0
    } else {
        v
    }
}

pub fn sanitize(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = sanitize_value(*v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_to_zero() {
        assert_eq!(sanitize_value(f64::NAN), 0.0);
        assert_eq!(sanitize_value(f64::INFINITY), 0.0);
        assert_eq!(sanitize_value(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_out_of_range_reset_not_clamped() {
        assert_eq!(sanitize_value(150_000.0), 0.0);
        assert_eq!(sanitize_value(-150_000.0), 0.0);
        assert_eq!(sanitize_value(100_000.5), 0.0);
    }

    #[test]
    fn test_in_range_unchanged() {
        assert_eq!(sanitize_value(99_999.0), 99_999.0);
        assert_eq!(sanitize_value(-3.25), -3.25);
        assert_eq!(sanitize_value(100_000.0), 100_000.0);
        assert_eq!(sanitize_value(-100_000.0), -100_000.0);
    }

    #[test]
    fn test_sanitize_slice() {
        let mut values = [f64::NAN, 1.0, 2e5, -7.0];
        sanitize(&mut values);
        assert_eq!(values, [0.0, 1.0, 0.0, -7.0]);
    }
}
