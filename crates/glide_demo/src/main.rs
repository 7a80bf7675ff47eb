//! Glide demo
//!
//! Drives a two-property model with a fixed-timestep loop standing in for a
//! platform frame clock: request frames while the animator reports activity,
//! step on each simulated frame, stop the clock once everything settles.
//!
//! Run with: cargo run -p glide_demo -- --fps 60 --duration-ms 1200

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use glide_animation::{
    f32_lerp, Animator, Easing, Subscription, Timeline, TimelineConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glide-demo", about = "Animate a model from a simulated frame clock")]
struct Args {
    /// Simulated frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Duration of the fade in milliseconds (the slide runs at half this)
    #[arg(long, default_value_t = 1200)]
    duration_ms: u32,
}

/// The host model: a panel fading in while sliding into place.
struct Panel {
    opacity: Timeline<f32>,
    offset_y: Timeline<f32>,
}

impl Panel {
    fn entering(duration_ms: u32) -> Self {
        Self {
            opacity: Timeline::new(TimelineConfig {
                duration_ms,
                easing: Easing::EaseInOutCubic,
                start: 0.0,
                end: 1.0,
                interpolate: f32_lerp(),
            }),
            offset_y: Timeline::new(TimelineConfig {
                duration_ms: duration_ms / 2,
                easing: Easing::EaseOutBack,
                start: 40.0,
                end: 0.0,
                interpolate: f32_lerp(),
            }),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let fps = args.fps.max(1);

    let animator = Animator::new()
        .animate(|p: &Panel| &p.opacity, |p, tl| p.opacity = tl)
        .animate(|p: &Panel| &p.offset_y, |p, tl| p.offset_y = tl);
    let mut panel = Panel::entering(args.duration_ms);

    let frame = Duration::from_secs(1) / fps;
    let mut clock = Duration::ZERO;
    let mut frames = 0u32;

    // The loop plays the external clock: it keeps delivering timestamps only
    // while the animator asks for them.
    while animator.subscription(&panel) == Subscription::Frames {
        animator.step(clock, &mut panel);
        tracing::info!(
            t_ms = clock.as_millis() as u64,
            opacity = f64::from(*panel.opacity.value()),
            offset_y = f64::from(*panel.offset_y.value()),
            "frame"
        );
        clock += frame;
        frames += 1;
    }

    tracing::info!(frames, "panel settled, clock released");
    Ok(())
}
