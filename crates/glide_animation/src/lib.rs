//! Glide Animation Core
//!
//! Single-property timelines and model-embedded animators, driven by an
//! external per-frame clock.
//!
//! # Features
//!
//! - **Timelines**: one value tweened from start to end over a fixed duration
//! - **Easing**: preset curves plus caller-supplied custom functions
//! - **Animators**: advance every timeline in a host model from one timestamp
//! - **Clock agnostic**: the host owns the frame clock and starts or stops it
//!   from the animator's activity report

pub mod animator;
pub mod easing;
pub mod error;
pub mod interpolate;
pub mod timeline;

pub use animator::{Animator, Subscription};
pub use easing::Easing;
pub use error::{ConfigError, Result};
pub use interpolate::{f32_lerp, lerp_f32, lerp_f64, Interpolator};
pub use timeline::{Timeline, TimelineConfig};
