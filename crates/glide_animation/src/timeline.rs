//! Single-property timeline state machine
//!
//! A [`Timeline`] carries one animated value from a start state to an end
//! state over a fixed duration. It moves through three states, one way only:
//! ready (configured, clock not yet seated), running (interpolating against
//! an absolute start timestamp), complete (terminal, configuration dropped).
//! Advancement consumes the timeline and returns its successor; nothing is
//! mutated in place.

use std::fmt;

use crate::easing::Easing;
use crate::error::{ConfigError, Result};
use crate::interpolate::Interpolator;

/// Configuration for a tween between two values.
pub struct TimelineConfig<T> {
    /// Duration in milliseconds. Must be at least 1.
    pub duration_ms: u32,
    /// Curve reshaping linear progress before interpolation.
    pub easing: Easing,
    /// Value at progress 0.
    pub start: T,
    /// Value at progress 1.
    pub end: T,
    /// Blend of start and end at a given eased progress.
    pub interpolate: Interpolator<T>,
}

impl<T> TimelineConfig<T> {
    /// Check the configuration without building a timeline.
    ///
    /// [`Timeline::new`] accepts any configuration and clamps a zero duration
    /// to 1ms; hosts that would rather reject call this first.
    pub fn validate(&self) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

/// One animated value progressing from start to end over a fixed duration.
///
/// Built with [`Timeline::new`] (animated) or [`Timeline::fixed`] (already
/// settled). The [`Animator`](crate::Animator) drives [`Timeline::advance`]
/// on every frame timestamp it receives.
#[derive(Clone)]
pub struct Timeline<T> {
    state: State<T>,
}

#[derive(Clone)]
enum State<T> {
    Ready {
        duration_ms: u32,
        easing: Easing,
        start: T,
        end: T,
        interpolate: Interpolator<T>,
    },
    Running {
        start_ms: u64,
        duration_ms: u32,
        easing: Easing,
        start: T,
        end: T,
        interpolate: Interpolator<T>,
        current: T,
    },
    Complete {
        current: T,
    },
}

impl<T> Timeline<T> {
    /// Build a timeline in the ready state.
    ///
    /// Always succeeds. A zero duration is clamped to 1ms, which makes the
    /// tween complete on its second advancement; use
    /// [`TimelineConfig::validate`] first to reject it instead.
    pub fn new(config: TimelineConfig<T>) -> Self {
        let TimelineConfig {
            duration_ms,
            easing,
            start,
            end,
            interpolate,
        } = config;
        let duration_ms = if duration_ms == 0 {
            tracing::warn!("zero timeline duration clamped to 1ms");
            1
        } else {
            duration_ms
        };
        Self {
            state: State::Ready {
                duration_ms,
                easing,
                start,
                end,
                interpolate,
            },
        }
    }

    /// A value with no animation in progress.
    pub fn fixed(value: T) -> Self {
        Self {
            state: State::Complete { current: value },
        }
    }

    /// Replace a settled timeline with a fixed value.
    ///
    /// An animation still pending or in flight wins over the replacement.
    /// Lets an externally driven value (user input, say) take over a slot
    /// only when nothing is animating it.
    pub fn fixed_if_inactive(value: T, timeline: Timeline<T>) -> Self {
        if timeline.is_active() {
            timeline
        } else {
            Self::fixed(value)
        }
    }

    /// True until the timeline reaches its terminal state.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, State::Complete { .. })
    }

    /// Current value: the configured start before the first advancement, the
    /// last interpolated value afterwards. O(1), never recomputes.
    pub fn value(&self) -> &T {
        match &self.state {
            State::Ready { start, .. } => start,
            State::Running { current, .. } => current,
            State::Complete { current } => current,
        }
    }

    /// Configured start while ready or running.
    ///
    /// A complete timeline retains only its final value, so that is returned
    /// instead; the original start is gone.
    pub fn start_value(&self) -> &T {
        match &self.state {
            State::Ready { start, .. } => start,
            State::Running { start, .. } => start,
            State::Complete { current } => current,
        }
    }

    /// Configured end while ready or running; the retained final value once
    /// complete (see [`Timeline::start_value`]).
    pub fn end_value(&self) -> &T {
        match &self.state {
            State::Ready { end, .. } => end,
            State::Running { end, .. } => end,
            State::Complete { current } => current,
        }
    }

    /// Advance to the clock reading `now_ms`.
    ///
    /// The first advancement seats the clock origin: a ready timeline starts
    /// at `now_ms` and shows its value at eased progress 0. A running
    /// timeline whose progress reaches 1.0 lands on the value at eased
    /// progress exactly 1.0, however far past the end the clock has moved,
    /// so an overshooting curve still settles on the configured end value.
    /// Advancing a complete timeline is a no-op.
    ///
    /// Normally driven by an [`Animator`](crate::Animator) step rather than
    /// called directly.
    pub fn advance(self, now_ms: u64) -> Self {
        let state = match self.state {
            State::Ready {
                duration_ms,
                easing,
                start,
                end,
                interpolate,
            } => {
                tracing::trace!(start_ms = now_ms, duration_ms, "timeline started");
                let current = interpolate(&start, &end, easing.apply(0.0));
                State::Running {
                    start_ms: now_ms,
                    duration_ms,
                    easing,
                    start,
                    end,
                    interpolate,
                    current,
                }
            }
            State::Running {
                start_ms,
                duration_ms,
                easing,
                start,
                end,
                interpolate,
                ..
            } => {
                // Signed so a timestamp behind the seated origin yields
                // negative progress instead of wrapping.
                let elapsed = now_ms as i64 - start_ms as i64;
                let progress = elapsed as f32 / duration_ms as f32;
                if progress >= 1.0 {
                    let current = interpolate(&start, &end, easing.apply(1.0));
                    tracing::trace!(now_ms, "timeline complete");
                    State::Complete { current }
                } else {
                    let current = interpolate(&start, &end, easing.apply(progress));
                    State::Running {
                        start_ms,
                        duration_ms,
                        easing,
                        start,
                        end,
                        interpolate,
                        current,
                    }
                }
            }
            complete @ State::Complete { .. } => complete,
        };
        Self { state }
    }
}

impl<T: fmt::Debug> fmt::Debug for Timeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ready {
                duration_ms,
                start,
                end,
                ..
            } => f
                .debug_struct("Ready")
                .field("duration_ms", duration_ms)
                .field("start", start)
                .field("end", end)
                .finish(),
            State::Running {
                start_ms,
                duration_ms,
                current,
                ..
            } => f
                .debug_struct("Running")
                .field("start_ms", start_ms)
                .field("duration_ms", duration_ms)
                .field("current", current)
                .finish(),
            State::Complete { current } => f
                .debug_struct("Complete")
                .field("current", current)
                .finish(),
        }
    }
}
