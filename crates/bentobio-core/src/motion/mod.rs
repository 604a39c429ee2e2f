//! Motion model: poses, spring and tween transitions.
//!
//! Components never schedule animation frames themselves. They ask for an
//! end-state (a [`Pose`]) plus a [`Transition`], and the host's transition
//! engine interpolates from wherever the element currently is.

pub mod card;
pub mod pose;
pub mod spring;
pub mod transition;

pub use card::{CardMotion, CardStyler, HeaderMotion, HeaderStyler, ANIMATED_PROPERTIES};
pub use pose::{Elevation, Pose};
pub use spring::{presets, SpringConfig};
pub use transition::{Easing, Transition, Tween};
