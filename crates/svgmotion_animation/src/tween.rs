//! Numeric attribute tweens
//!
//! A [`Tween`] is an explicit state machine: it is `Running { count }` until
//! the step count reaches the total number of steps, then `Completed`. Each
//! timer tick performs one transition. The async [`Tween::run`] drives the
//! machine from a tokio interval and writes every produced value to the
//! target attribute.
//!
//! ```no_run
//! # async fn demo(rect: &svgmotion_core::SvgElement) -> svgmotion_core::Result<()> {
//! use svgmotion_animation::{tween, Easing};
//!
//! tween("width", 10.0, 200.0, rect, 2.0, 20, Easing::EaseOutQuart).await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use svgmotion_core::{AttributeTarget, MotionError, Result};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::easing::Easing;

/// Parameters for one attribute tween
#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    /// Attribute to animate, e.g. `width` or `font-size`
    pub attribute: String,
    pub start: f64,
    pub stop: f64,
    /// Distance covered per step
    pub step: f64,
    /// Milliseconds between ticks
    pub tick_ms: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(attribute: impl Into<String>, start: f64, stop: f64) -> Self {
        Self {
            attribute: attribute.into(),
            start,
            stop,
            step: 1.0,
            tick_ms: 16,
            easing: Easing::Linear,
        }
    }

    /// Builder: set the step size
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Builder: set the tick interval
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Builder: set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check the numeric inputs before anything is written
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() {
            return Err(MotionError::InvalidArgument {
                name: "start",
                value: self.start,
            });
        }
        if !self.stop.is_finite() {
            return Err(MotionError::InvalidArgument {
                name: "stop",
                value: self.stop,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(MotionError::InvalidArgument {
                name: "step",
                value: self.step,
            });
        }
        if self.tick_ms == 0 {
            return Err(MotionError::InvalidArgument {
                name: "tick_ms",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Tween lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenState {
    /// `count` ticks have advanced the tween so far
    Running { count: u64 },
    Completed,
}

/// Result of a single tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// Value to write, `None` when the curve produced NaN for this tick
    pub value: Option<f64>,
    /// Whether this tick moved the tween to `Completed`
    pub completed: bool,
}

/// An in-flight attribute tween
#[derive(Clone, Debug)]
pub struct Tween {
    spec: TweenSpec,
    distance: f64,
    direction: f64,
    total_steps: f64,
    state: TweenState,
}

impl Tween {
    pub fn new(spec: TweenSpec) -> Result<Self> {
        spec.validate()?;

        let distance = (spec.stop - spec.start).abs();
        let direction = if spec.stop < spec.start { -1.0 } else { 1.0 };
        let total_steps = distance / spec.step;

        Ok(Self {
            spec,
            distance,
            direction,
            total_steps,
            state: TweenState::Running { count: 0 },
        })
    }

    /// Fractional number of steps between start and stop
    pub fn total_steps(&self) -> f64 {
        self.total_steps
    }

    /// Upper bound on the step count
    pub fn max_count(&self) -> u64 {
        self.total_steps.ceil() as u64
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == TweenState::Completed
    }

    /// Advance the state machine by one tick
    ///
    /// The tick that completes the tween always yields exactly `stop`.
    /// Ticking a completed tween is a no-op.
    pub fn tick(&mut self) -> TickOutcome {
        let count = match self.state {
            TweenState::Running { count } => count,
            TweenState::Completed => {
                return TickOutcome {
                    value: None,
                    completed: true,
                }
            }
        };

        if count as f64 >= self.total_steps {
            self.state = TweenState::Completed;
            return TickOutcome {
                value: Some(self.spec.stop),
                completed: true,
            };
        }

        let progress = count as f64 / self.total_steps;
        let value =
            self.spec.start + self.distance * self.spec.easing.apply(progress) * self.direction;

        self.state = TweenState::Running { count: count + 1 };
        TickOutcome {
            value: value.is_finite().then_some(value),
            completed: false,
        }
    }

    /// Drive the tween to completion against `target`
    ///
    /// Writes `start` immediately, then one value per tick. Resolves `true`
    /// once the tween completes.
    pub async fn run<T: AttributeTarget + ?Sized>(mut self, target: &T) -> bool {
        let attribute = self.spec.attribute.clone();
        target.set_number(&attribute, self.spec.start);

        tracing::debug!(
            attribute = %attribute,
            start = self.spec.start,
            stop = self.spec.stop,
            easing = %self.spec.easing,
            total_steps = self.total_steps,
            "tween started"
        );

        let period = Duration::from_millis(self.spec.tick_ms);
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let outcome = self.tick();
            match outcome.value {
                Some(value) => target.set_number(&attribute, value),
                None => tracing::trace!(attribute = %attribute, "skipped non-finite value"),
            }
            if outcome.completed {
                break;
            }
        }

        tracing::debug!(attribute = %attribute, stop = self.spec.stop, "tween completed");
        true
    }
}

/// Tween `attribute` on `target` from `start` to `stop`
///
/// Fails with [`MotionError::InvalidArgument`] before touching the target if
/// any numeric input is unusable.
pub async fn tween<T: AttributeTarget + ?Sized>(
    attribute: &str,
    start: f64,
    stop: f64,
    target: &T,
    step: f64,
    tick_ms: u64,
    easing: Easing,
) -> Result<bool> {
    let spec = TweenSpec::new(attribute, start, stop)
        .with_step(step)
        .with_tick_ms(tick_ms)
        .with_easing(easing);
    Ok(Tween::new(spec)?.run(target).await)
}

/// [`tween`] with the easing curve looked up by name
pub async fn tween_named<T: AttributeTarget + ?Sized>(
    attribute: &str,
    start: f64,
    stop: f64,
    target: &T,
    step: f64,
    tick_ms: u64,
    easing: &str,
) -> Result<bool> {
    let easing = easing.parse::<Easing>()?;
    tween(attribute, start, stop, target, step, tick_ms, easing).await
}
