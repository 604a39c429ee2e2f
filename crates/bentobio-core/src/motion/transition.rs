//! Timing of a move between poses.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::spring::{SpringConfig, EASING_SAMPLES};

/// Cubic easing curves for tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
        }
    }
}

/// Fixed-duration transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tween {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(300, Easing::EaseOut)
    }
}

impl Tween {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// How an element moves toward its next pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Spring(SpringConfig),
    Tween(Tween),
}

impl Transition {
    pub fn duration(&self) -> Duration {
        match self {
            Transition::Spring(spring) => spring.settle_time(),
            Transition::Tween(tween) => tween.duration(),
        }
    }

    pub fn timing_function(&self) -> String {
        match self {
            Transition::Spring(spring) => spring.css_easing(EASING_SAMPLES),
            Transition::Tween(tween) => tween.easing.css().to_string(),
        }
    }

    /// CSS `transition` value covering `properties`.
    ///
    /// Because CSS transitions start from the current computed value, a
    /// retarget mid-flight continues from where the element is instead of
    /// jumping back to the previous end-state.
    pub fn to_css(&self, properties: &[&str]) -> String {
        let duration = self.duration().as_millis();
        let timing = self.timing_function();
        properties
            .iter()
            .map(|property| format!("{property} {duration}ms {timing}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_css() {
        let transition = Transition::Tween(Tween::new(100, Easing::EaseOut));
        assert_eq!(
            transition.to_css(&["transform", "opacity"]),
            "transform 100ms cubic-bezier(0, 0, 0.58, 1), opacity 100ms cubic-bezier(0, 0, 0.58, 1)"
        );
    }

    #[test]
    fn spring_css_uses_settle_time() {
        let spring = SpringConfig::default();
        let css = Transition::Spring(spring).to_css(&["transform"]);
        let expected = format!("transform {}ms linear(", spring.settle_time().as_millis());
        assert!(css.starts_with(&expected), "{css}");
    }
}
