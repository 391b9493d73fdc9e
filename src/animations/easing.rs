//! Easing curves for tween legs.
//!
//! Each curve maps normalized leg progress `t` in `[0, 1]` to an eased
//! progress in `[0, 1]`. Inputs outside the range are clamped, so every
//! curve returns exactly `0.0` at the start and `1.0` at the end of a leg.

/// Easing function signature.
pub type EasingFn = fn(f32) -> f32;

/// Constant velocity.
#[inline]
pub fn linear(t: f32) -> f32 { t.clamp(0.0, 1.0) }

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0f32).mul_add(t, 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-in.
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [(&str, EasingFn); 6] = [
        ("linear", linear),
        ("ease_in", ease_in),
        ("ease_out", ease_out),
        ("ease_in_out", ease_in_out),
        ("ease_in_cubic", ease_in_cubic),
        ("ease_out_cubic", ease_out_cubic),
    ];

    #[test]
    fn test_curves_hit_endpoints() {
        for (name, f) in CURVES {
            assert_eq!(f(0.0), 0.0, "{name} at 0");
            assert!((f(1.0) - 1.0).abs() < 1e-6, "{name} at 1");
        }
    }

    #[test]
    fn test_curves_clamp_input() {
        for (name, f) in CURVES {
            assert_eq!(f(-3.0), 0.0, "{name} below range");
            assert!((f(4.0) - 1.0).abs() < 1e-6, "{name} above range");
        }
    }

    #[test]
    fn test_curves_monotonic() {
        for (name, f) in CURVES {
            let mut prev = f(0.0);
            for i in 1..=100 {
                let v = f(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{name} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
