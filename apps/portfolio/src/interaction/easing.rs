//! Easing curves. All take and return progress in [0, 1]; inputs outside are clamped.

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Used by the scroll progress bar.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Elapsed fraction of a fixed-duration animation, clamped to [0, 1].
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_endpoints() {
        for f in [ease_in_out_cubic, ease_out_cubic, ease_in_out_quad] {
            assert!(f(0.0).abs() < EPS);
            assert!((f(1.0) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_in_out_cubic_midpoint_and_quarter() {
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < EPS);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < EPS);
    }

    #[test]
    fn test_out_cubic_front_loaded() {
        // 1 - 0.5^3
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(400.0, 800.0), 0.5);
        assert_eq!(progress(1200.0, 800.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }
}
