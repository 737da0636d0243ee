//! Easing functions for animations
//!
//! The table is closed: every curve is an enum variant dispatched by `match`,
//! so there is nothing to register or mutate at runtime. Names are the
//! camelCase identifiers hosts pass in (`"easeInOutQuart"`).

use std::fmt;
use std::str::FromStr;

use svgmotion_core::{MotionError, Result};

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

impl Easing {
    /// Every curve, in table order
    pub const ALL: [Easing; 16] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    ///
    /// The elastic curves divide by a term that vanishes at one boundary,
    /// so `EaseInElastic` at 0 and `EaseOutElastic` at 1 return NaN.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => (t - 1.0).powi(3) + 1.0,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::EaseInQuart => t * t * t * t,
            Easing::EaseOutQuart => 1.0 - (t - 1.0).powi(4),
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Easing::EaseInQuint => t * t * t * t * t,
            Easing::EaseOutQuint => 1.0 + (t - 1.0).powi(5),
            Easing::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Easing::EaseInElastic => (0.04 - 0.04 / t) * (25.0 * t).sin() + 1.0,
            Easing::EaseOutElastic => {
                let u = t - 1.0;
                0.04 * t / u * (25.0 * u).sin()
            }
            Easing::EaseInOutElastic => {
                let u = t - 0.5;
                if u < 0.0 {
                    (0.01 + 0.01 / u) * (50.0 * u).sin()
                } else {
                    (0.02 - 0.01 / u) * (50.0 * u).sin() + 1.0
                }
            }
        }
    }

    /// The curve's name as hosts spell it
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseInOutQuart => "easeInOutQuart",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseInOutQuint => "easeInOutQuint",
            Easing::EaseInElastic => "easeInElastic",
            Easing::EaseOutElastic => "easeOutElastic",
            Easing::EaseInOutElastic => "easeInOutElastic",
        }
    }

    /// Whether the curve never decreases over [0, 1]
    pub fn is_monotone(&self) -> bool {
        !matches!(
            self,
            Easing::EaseInElastic | Easing::EaseOutElastic | Easing::EaseInOutElastic
        )
    }

    /// `samples + 1` evenly spaced `(t, value)` pairs over [0, 1]
    pub fn sample(&self, samples: usize) -> Vec<(f64, f64)> {
        let samples = samples.max(1);
        (0..=samples)
            .map(|i| {
                let t = i as f64 / samples as f64;
                (t, self.apply(t))
            })
            .collect()
    }
}

impl FromStr for Easing {
    type Err = MotionError;

    fn from_str(name: &str) -> Result<Self> {
        Easing::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == name)
            .ok_or_else(|| MotionError::UnknownEasing(name.to_string()))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate a named curve at progress `t`
pub fn evaluate(name: &str, t: f64) -> Result<f64> {
    Ok(name.parse::<Easing>()?.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_linear_is_identity() {
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            assert_eq!(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_endpoints() {
        for easing in Easing::ALL {
            let end = easing.apply(1.0);
            if easing == Easing::EaseOutElastic {
                assert!(end.is_nan());
                continue;
            }
            assert!((end - 1.0).abs() < EPS, "{easing} ends at {end}");
        }

        for easing in Easing::ALL {
            let start = easing.apply(0.0);
            if easing == Easing::EaseInElastic {
                assert!(start.is_nan());
                continue;
            }
            assert!(start.abs() < 0.05, "{easing} starts at {start}");
        }
    }

    #[test]
    fn test_out_elastic_converges_to_one() {
        let near_end = Easing::EaseOutElastic.apply(1.0 - 1e-6);
        assert!((near_end - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_in_out_midpoint() {
        assert!((Easing::EaseInOutQuad.apply(0.5) - 0.5).abs() < EPS);
        assert!((Easing::EaseInOutCubic.apply(0.5) - 0.5).abs() < EPS);
        assert!((Easing::EaseInOutQuart.apply(0.5) - 0.5).abs() < EPS);
        assert!((Easing::EaseInOutQuint.apply(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_known_values() {
        assert!((Easing::EaseInQuad.apply(0.5) - 0.25).abs() < EPS);
        assert!((Easing::EaseOutQuad.apply(0.5) - 0.75).abs() < EPS);
        assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() < EPS);
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < EPS);
        assert!((Easing::EaseInQuint.apply(0.5) - 0.03125).abs() < EPS);
    }

    #[test]
    fn test_monotone_curves_never_decrease() {
        for easing in Easing::ALL.iter().filter(|e| e.is_monotone()) {
            let samples = easing.sample(200);
            for pair in samples.windows(2) {
                assert!(
                    pair[1].1 >= pair[0].1 - EPS,
                    "{easing} decreases at t = {}",
                    pair[1].0
                );
            }
        }
    }

    #[test]
    fn test_names_parse_back() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
        assert_eq!(Easing::default(), Easing::Linear);
        assert_eq!(Easing::EaseInOutQuart.to_string(), "easeInOutQuart");
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "easeInBounce".parse::<Easing>(),
            Err(MotionError::UnknownEasing("easeInBounce".to_string()))
        );
        // Names are case sensitive
        assert!("Linear".parse::<Easing>().is_err());
        assert!(evaluate("swing", 0.5).is_err());
    }

    #[test]
    fn test_evaluate_by_name() {
        assert_eq!(evaluate("linear", 0.3), Ok(0.3));
        assert!((evaluate("easeInCubic", 0.5).unwrap() - 0.125).abs() < EPS);
    }

    #[test]
    fn test_sample_spacing() {
        let samples = Easing::Linear.sample(4);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], (0.0, 0.0));
        assert_eq!(samples[2], (0.5, 0.5));
        assert_eq!(samples[4], (1.0, 1.0));
    }
}
