//! Easing curves for timelines
//!
//! A curve reshapes linear progress before interpolation. Every variant maps
//! 0.0 to 0.0 and 1.0 to 1.0; between the endpoints a curve is unconstrained
//! and may leave the unit range (see [`Easing::EaseOutBack`]).

/// Easing curve applied to a timeline's linear progress.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Overshoots past the end value before settling on it.
    EaseOutBack,
    /// Caller-supplied curve. Must map 0.0 to 0.0 and 1.0 to 1.0; anything in
    /// between is up to the curve.
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Apply the curve to a progress value (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
            Easing::Custom(f) => f(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESETS: &[Easing] = &[
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseOutBack,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in PRESETS {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn out_back_overshoots_mid_flight() {
        assert!(Easing::EaseOutBack.apply(0.8) > 1.0);
    }

    #[test]
    fn custom_curve_is_called() {
        let square = Easing::Custom(|t| t * t);
        assert_eq!(square.apply(0.5), 0.25);
    }
}
