//! Visual end-states a card or header can be animated to.

use serde::{Deserialize, Serialize};

/// Shadow depth of a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elevation {
    #[default]
    Rest,
    Raised,
}

/// Target values for the animated properties of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in CSS pixels, positive is downwards
    pub translate_y: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    pub elevation: Elevation,
    pub z_index: i32,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
        elevation: Elevation::Rest,
        z_index: 0,
    };

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_translate_y(mut self, translate_y: f32) -> Self {
        self.translate_y = translate_y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotate_deg: f32) -> Self {
        self.rotate_deg = rotate_deg;
        self
    }

    pub fn raised(mut self, z_index: i32) -> Self {
        self.elevation = Elevation::Raised;
        self.z_index = z_index;
        self
    }

    /// CSS `transform` value. Order matches translate → scale → rotate.
    pub fn transform_css(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotate({}deg)",
            self.translate_y, self.scale, self.rotate_deg
        )
    }
}
