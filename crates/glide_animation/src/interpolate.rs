//! Interpolation between animated values
//!
//! Timelines do not know how to blend their value type; the caller supplies
//! an [`Interpolator`]. Helpers here cover the common numeric cases.

use std::sync::Arc;

/// Caller-supplied blend of start and end at a given eased progress.
///
/// Shared behind an `Arc` so a [`Timeline`](crate::Timeline) stays cheap to
/// clone.
pub type Interpolator<T> = Arc<dyn Fn(&T, &T, f32) -> T>;

/// Linear blend. Deliberately unclamped: an overshooting easing hands in a
/// progress outside 0..=1 and the blend must follow it.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// [`lerp_f32`] over f64, with the eased progress widened.
pub fn lerp_f64(a: f64, b: f64, t: f32) -> f64 {
    a + (b - a) * f64::from(t)
}

/// Ready-made [`Interpolator`] over f32.
pub fn f32_lerp() -> Interpolator<f32> {
    Arc::new(|a, b, t| lerp_f32(*a, *b, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp_f32(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp_f32(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp_f64(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn lerp_does_not_clamp() {
        assert_eq!(lerp_f32(0.0, 10.0, 1.2), 12.0);
        assert_eq!(lerp_f32(0.0, 10.0, -0.5), -5.0);
    }
}
