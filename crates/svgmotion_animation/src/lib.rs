//! svgmotion Animation System
//!
//! Easing curves, numeric attribute tweens, and letter-by-letter text reveals
//! for SVG elements.
//!
//! # Features
//!
//! - **Easing Table**: sixteen named curves from the penner family, including elastic ones
//! - **Attribute Tweens**: tick-driven state machines that land exactly on their stop value
//! - **Lettering**: line-by-line reveals driven by per-character `dx` offsets
//!
//! Everything runs on timer ticks of the current tokio runtime. Tweens on
//! different targets can be awaited together; lines within one reveal never
//! overlap.

pub mod easing;
pub mod lettering;
pub mod tween;

pub use easing::{evaluate, Easing};
pub use lettering::{prepare_lines, reveal_line, reveal_text, shift_offsets};
pub use tween::{tween, tween_named, TickOutcome, Tween, TweenSpec, TweenState};
