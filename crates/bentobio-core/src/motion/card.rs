//! Pose selection for cards and the profile header.

use serde::{Deserialize, Serialize};

use super::pose::{Elevation, Pose};
use super::spring::{presets, SpringConfig};
use super::transition::{Easing, Transition, Tween};
use crate::interaction::{InteractionState, PointerPhase};
use crate::theme::Theme;

/// Properties driven by card motion.
pub const ANIMATED_PROPERTIES: [&str; 3] = ["transform", "opacity", "box-shadow"];

/// Poses and timings for a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardMotion {
    /// Before the card has entered the viewport
    pub hidden: Pose,
    pub rest: Pose,
    pub hover: Pose,
    pub press: Pose,
    /// Entrance, hover and return-to-rest
    pub spring: SpringConfig,
    /// Press in; must read as instantaneous
    pub press_tween: Tween,
}

impl Default for CardMotion {
    fn default() -> Self {
        Self {
            hidden: Pose::REST
                .with_opacity(0.0)
                .with_translate_y(50.0)
                .with_scale(0.9),
            rest: Pose::REST,
            hover: Pose::REST.with_scale(1.02).with_rotation(1.0).raised(10),
            press: Pose::REST
                .with_scale(0.96)
                .with_opacity(0.8)
                .with_rotation(0.0)
                .raised(10),
            spring: presets::card(),
            press_tween: Tween::new(100, Easing::EaseOut),
        }
    }
}

impl CardMotion {
    /// Current target pose and the transition toward it.
    ///
    /// The most recent state wins; a card that has not been seen yet stays
    /// hidden whatever the pointer does.
    pub fn resolve(&self, state: &InteractionState) -> (Pose, Transition) {
        if !state.has_entered_viewport() {
            return (self.hidden, Transition::Spring(self.spring));
        }
        match state.phase() {
            PointerPhase::Pressed => (self.press, Transition::Tween(self.press_tween)),
            PointerPhase::Hovering => (self.hover, Transition::Spring(self.spring)),
            PointerPhase::Idle => (self.rest, Transition::Spring(self.spring)),
        }
    }
}

/// Card motion with its CSS fragments precomputed.
///
/// Spring curves are sampled once per page, not once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyler {
    motion: CardMotion,
    spring_transition: String,
    press_transition: String,
    shadow_rest: String,
    shadow_raised: String,
}

impl CardStyler {
    pub fn new(motion: CardMotion, theme: &Theme) -> Self {
        Self {
            motion,
            spring_transition: Transition::Spring(motion.spring).to_css(&ANIMATED_PROPERTIES),
            press_transition: Transition::Tween(motion.press_tween).to_css(&ANIMATED_PROPERTIES),
            shadow_rest: theme.shadow_rest.clone(),
            shadow_raised: theme.shadow_raised.clone(),
        }
    }

    pub fn motion(&self) -> &CardMotion {
        &self.motion
    }

    fn shadow(&self, elevation: Elevation) -> &str {
        match elevation {
            Elevation::Rest => &self.shadow_rest,
            Elevation::Raised => &self.shadow_raised,
        }
    }

    /// Inline style declarations for a card in `state`.
    pub fn style(&self, state: &InteractionState) -> String {
        let (pose, transition) = self.motion.resolve(state);
        let transition_css = match transition {
            Transition::Spring(_) => &self.spring_transition,
            Transition::Tween(_) => &self.press_transition,
        };
        format!(
            "opacity: {}; transform: {}; box-shadow: {}; z-index: {}; transition: {};",
            pose.opacity,
            pose.transform_css(),
            self.shadow(pose.elevation),
            pose.z_index,
            transition_css,
        )
    }
}

/// Header entrance and avatar feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderMotion {
    pub hidden: Pose,
    pub entrance: Tween,
    pub avatar_hover_scale: f32,
    pub avatar_press_scale: f32,
    pub avatar_spring: SpringConfig,
}

impl Default for HeaderMotion {
    fn default() -> Self {
        Self {
            hidden: Pose::REST.with_opacity(0.0).with_translate_y(-20.0),
            entrance: Tween::new(500, Easing::EaseOut),
            avatar_hover_scale: 1.05,
            avatar_press_scale: 0.95,
            avatar_spring: presets::snappy(),
        }
    }
}

impl HeaderMotion {
    /// Name of the generated entrance keyframes.
    pub const KEYFRAMES: &'static str = "bento-header-enter";

    /// `@keyframes` rule for the header entrance. Plays once when the
    /// header is inserted.
    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {} {{\n  from {{ opacity: {}; transform: {}; }}\n  to {{ opacity: 1; transform: {}; }}\n}}\n",
            Self::KEYFRAMES,
            self.hidden.opacity,
            self.hidden.transform_css(),
            Pose::REST.transform_css(),
        )
    }

    /// Inline style that runs the entrance on the header block.
    pub fn block_style(&self) -> String {
        format!(
            "animation: {} {}ms {} both;",
            Self::KEYFRAMES,
            self.entrance.duration_ms,
            self.entrance.easing.css(),
        )
    }

    pub fn avatar_scale(&self, phase: PointerPhase) -> f32 {
        match phase {
            PointerPhase::Idle => 1.0,
            PointerPhase::Hovering => self.avatar_hover_scale,
            PointerPhase::Pressed => self.avatar_press_scale,
        }
    }
}

/// Header motion with its CSS fragments precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyler {
    motion: HeaderMotion,
    block_style: String,
    avatar_transition: String,
}

impl HeaderStyler {
    pub fn new(motion: HeaderMotion) -> Self {
        Self {
            motion,
            block_style: motion.block_style(),
            avatar_transition: Transition::Spring(motion.avatar_spring).to_css(&["transform"]),
        }
    }

    pub fn motion(&self) -> &HeaderMotion {
        &self.motion
    }

    pub fn keyframes_css(&self) -> String {
        self.motion.keyframes_css()
    }

    pub fn block_style(&self) -> &str {
        &self.block_style
    }

    pub fn avatar_style(&self, phase: PointerPhase) -> String {
        format!(
            "transform: scale({}); transition: {};",
            self.motion.avatar_scale(phase),
            self.avatar_transition,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{CardInput, PointerKind};

    fn seen() -> InteractionState {
        let mut state = InteractionState::new(true);
        state.enter_viewport();
        state
    }

    #[test]
    fn unseen_card_is_hidden() {
        let motion = CardMotion::default();
        let mut state = InteractionState::new(true);
        state.apply(CardInput::Enter(PointerKind::Mouse));
        let (pose, transition) = motion.resolve(&state);
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(pose.translate_y, 50.0);
        assert_eq!(pose.scale, 0.9);
        assert!(matches!(transition, Transition::Spring(_)));
    }

    #[test]
    fn hover_pose() {
        let motion = CardMotion::default();
        let mut state = seen();
        state.apply(CardInput::Enter(PointerKind::Mouse));
        let (pose, _) = motion.resolve(&state);
        assert_eq!(pose.scale, 1.02);
        assert_eq!(pose.rotate_deg, 1.0);
        assert_eq!(pose.elevation, Elevation::Raised);
        assert_eq!(pose.z_index, 10);
    }

    #[test]
    fn press_uses_fast_tween() {
        let motion = CardMotion::default();
        let mut state = seen();
        state.apply(CardInput::Enter(PointerKind::Mouse));
        state.apply(CardInput::Down(PointerKind::Mouse));
        let (pose, transition) = motion.resolve(&state);
        assert!(pose.scale < motion.rest.scale);
        assert_eq!(pose.rotate_deg, 0.0);
        assert_eq!(pose.opacity, 0.8);
        assert_eq!(
            transition,
            Transition::Tween(Tween::new(100, Easing::EaseOut))
        );
    }

    #[test]
    fn styler_switches_transition_on_press() {
        let styler = CardStyler::new(CardMotion::default(), &Theme::default());
        let mut state = seen();

        let rest = styler.style(&state);
        assert!(rest.contains("opacity: 1;"), "{rest}");
        assert!(rest.contains("linear("), "{rest}");
        assert!(rest.contains("box-shadow: 0 1px 2px"), "{rest}");

        state.apply(CardInput::Down(PointerKind::Touch));
        let pressed = styler.style(&state);
        assert!(pressed.contains("scale(0.96)"), "{pressed}");
        assert!(pressed.contains("transform 100ms cubic-bezier(0, 0, 0.58, 1)"), "{pressed}");
        assert!(!pressed.contains("linear("), "{pressed}");
    }

    #[test]
    fn header_entrance_keyframes() {
        let motion = HeaderMotion::default();
        let keyframes = motion.keyframes_css();
        assert!(keyframes.starts_with("@keyframes bento-header-enter {"));
        assert!(keyframes.contains("from { opacity: 0; transform: translateY(-20px) scale(1) rotate(0deg); }"));
        assert!(keyframes.contains("to { opacity: 1; transform: translateY(0px) scale(1) rotate(0deg); }"));
        assert_eq!(
            motion.block_style(),
            "animation: bento-header-enter 500ms cubic-bezier(0, 0, 0.58, 1) both;"
        );
    }

    #[test]
    fn avatar_scales_with_phase() {
        let motion = HeaderMotion::default();
        assert_eq!(motion.avatar_scale(PointerPhase::Idle), 1.0);
        assert_eq!(motion.avatar_scale(PointerPhase::Hovering), 1.05);
        assert_eq!(motion.avatar_scale(PointerPhase::Pressed), 0.95);
    }

    #[test]
    fn header_styler_reuses_avatar_transition() {
        let styler = HeaderStyler::new(HeaderMotion::default());
        let idle = styler.avatar_style(PointerPhase::Idle);
        let pressed = styler.avatar_style(PointerPhase::Pressed);
        assert!(idle.starts_with("transform: scale(1);"), "{idle}");
        assert!(pressed.starts_with("transform: scale(0.95);"), "{pressed}");

        let transition = |style: &str| style.split_once("transition: ").map(|(_, t)| t.to_string());
        assert_eq!(transition(&idle), transition(&pressed));
        assert!(idle.contains("transform ") && idle.contains("linear("), "{idle}");
        assert_eq!(styler.block_style(), HeaderMotion::default().block_style());
    }
}
