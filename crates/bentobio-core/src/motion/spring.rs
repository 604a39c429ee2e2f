//! Damped harmonic oscillator used for entrance and hover motion.
//!
//! The host animation primitive only understands timing curves, so the
//! spring is solved in closed form for a unit step (0 → 1, starting at
//! rest) and sampled into a CSS `linear()` easing function whose duration
//! is the spring's settle time.
//!
//! # Parameters
//!
//! - **stiffness** (k): restoring force. Higher = faster response.
//! - **damping** (c): velocity drag. Below `2√(km)` the spring overshoots.
//! - **mass** (m): inertia. UI motion almost always uses 1.
//!
//! # Invariants
//!
//! 1. `position_at(0) == 0` and the response tends to 1.
//! 2. `settle_time()` is the first instant after which the response stays
//!    within `REST_THRESHOLD` of 1, capped at `MAX_SETTLE`.
//! 3. The first and last points of `css_easing()` are exactly 0 and 1.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Distance from the target below which the spring is at rest.
const REST_THRESHOLD: f64 = 0.001;

/// Springs that never settle (zero damping) are cut off here.
const MAX_SETTLE: Duration = Duration::from_secs(10);

/// Resolution of the settle-time scan.
const SCAN_STEP_MS: u64 = 1;

const MIN_STIFFNESS: f64 = 0.1;
const MIN_MASS: f64 = 0.001;

/// Number of points in the generated CSS easing curve.
pub const EASING_SAMPLES: usize = 40;

/// Spring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    /// Card tuning: fast, slightly underdamped.
    fn default() -> Self {
        Self::new(400.0, 25.0)
    }
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    fn k(&self) -> f64 {
        self.stiffness.max(MIN_STIFFNESS)
    }

    fn c(&self) -> f64 {
        self.damping.max(0.0)
    }

    fn m(&self) -> f64 {
        self.mass.max(MIN_MASS)
    }

    /// Undamped angular frequency ω₀ = √(k/m).
    pub fn natural_frequency(&self) -> f64 {
        (self.k() / self.m()).sqrt()
    }

    /// Damping coefficient at which the spring stops overshooting.
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.k() * self.m()).sqrt()
    }

    /// ζ = c / c_crit. Below 1 the spring oscillates around the target.
    pub fn damping_ratio(&self) -> f64 {
        self.c() / self.critical_damping()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    /// Normalized position `secs` seconds after a unit step.
    pub fn position_at(&self, secs: f64) -> f64 {
        if secs <= 0.0 {
            return 0.0;
        }

        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-w0 * secs).exp() * (1.0 + w0 * secs)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * secs).exp();
            1.0 - envelope * ((wd * secs).cos() + (zeta * w0 / wd) * (wd * secs).sin())
        } else {
            let spread = w0 * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * w0 + spread;
            let r2 = -zeta * w0 - spread;
            1.0 - (r2 * (r1 * secs).exp() - r1 * (r2 * secs).exp()) / (r2 - r1)
        }
    }

    /// Time until the response stays within the rest threshold.
    pub fn settle_time(&self) -> Duration {
        let max_steps = MAX_SETTLE.as_millis() as u64 / SCAN_STEP_MS;
        let mut last_outside = 0;
        for step in 0..=max_steps {
            let secs = (step * SCAN_STEP_MS) as f64 / 1000.0;
            if (1.0 - self.position_at(secs)).abs() > REST_THRESHOLD {
                last_outside = step;
            }
        }
        Duration::from_millis((last_outside + 1) * SCAN_STEP_MS).min(MAX_SETTLE)
    }

    /// Largest excursion past the target, as a fraction of the step.
    pub fn overshoot(&self) -> f64 {
        if !self.is_underdamped() {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        // First peak of the step response sits at t = π / ωd.
        self.position_at(std::f64::consts::PI / wd) - 1.0
    }

    /// CSS `linear()` timing function tracing the step response over
    /// [`settle_time`](Self::settle_time).
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let settle = self.settle_time().as_secs_f64();
        let points: Vec<String> = (0..samples)
            .map(|i| {
                let value = if i == 0 {
                    0.0
                } else if i == samples - 1 {
                    1.0
                } else {
                    self.position_at(settle * i as f64 / (samples - 1) as f64)
                };
                format!("{value:.4}")
            })
            .collect();
        format!("linear({})", points.join(", "))
    }
}

/// Common spring configurations.
pub mod presets {
    use super::SpringConfig;

    /// Card entrance and hover.
    pub fn card() -> SpringConfig {
        SpringConfig::new(400.0, 25.0)
    }

    /// Small scale changes such as the header avatar.
    pub fn snappy() -> SpringConfig {
        SpringConfig::new(550.0, 30.0)
    }

    /// Fastest convergence without overshoot for a given stiffness.
    pub fn critical(stiffness: f64) -> SpringConfig {
        let mut spring = SpringConfig::new(stiffness, 0.0);
        spring.damping = spring.critical_damping();
        spring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_spring_is_slightly_underdamped() {
        let spring = presets::card();
        let zeta = spring.damping_ratio();
        assert!((zeta - 0.625).abs() < 1e-9, "zeta: {zeta}");
        assert!(spring.is_underdamped());
        let overshoot = spring.overshoot();
        assert!(overshoot > 0.0 && overshoot < 0.1, "overshoot: {overshoot}");
    }

    #[test]
    fn card_spring_settles_well_under_a_second() {
        let settle = presets::card().settle_time();
        assert!(settle > Duration::from_millis(300), "settle: {settle:?}");
        assert!(settle < Duration::from_millis(800), "settle: {settle:?}");
    }

    #[test]
    fn response_starts_at_zero_and_reaches_one() {
        for spring in [presets::card(), presets::critical(170.0), SpringConfig::new(170.0, 100.0)] {
            assert_eq!(spring.position_at(0.0), 0.0);
            let end = spring.position_at(spring.settle_time().as_secs_f64());
            assert!((end - 1.0).abs() <= REST_THRESHOLD, "end: {end}");
        }
    }

    #[test]
    fn critical_and_overdamped_never_overshoot() {
        for spring in [presets::critical(400.0), SpringConfig::new(170.0, 100.0)] {
            assert_eq!(spring.overshoot(), 0.0);
            for ms in 0..2000 {
                assert!(spring.position_at(ms as f64 / 1000.0) <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn undamped_spring_is_capped() {
        let spring = SpringConfig::new(100.0, 0.0);
        assert_eq!(spring.settle_time(), MAX_SETTLE);
    }

    #[test]
    fn css_easing_endpoints() {
        let easing = presets::card().css_easing(10);
        assert!(easing.starts_with("linear(0.0000, "), "{easing}");
        assert!(easing.ends_with(", 1.0000)"), "{easing}");
        assert_eq!(easing.matches(',').count(), 9);
    }

    #[test]
    fn css_easing_shows_overshoot() {
        let easing = presets::card().css_easing(EASING_SAMPLES);
        let values: Vec<f64> = easing
            .trim_start_matches("linear(")
            .trim_end_matches(')')
            .split(", ")
            .map(|v| v.parse().unwrap())
            .collect();
        assert!(values.iter().any(|v| *v > 1.0));
    }
}
