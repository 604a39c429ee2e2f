//! Per-card interaction state.
//!
//! Every rendered card owns exactly one [`InteractionState`]. It is mutated
//! only by that card's own pointer, keyboard and visibility handlers and is
//! dropped with the card.
//!
//! ```text
//! Idle ──enter──▶ Hovering ──leave──▶ Idle
//!  │                 │
//!  └──down──▶ Pressed ◀──down──┘
//!              │
//!              ├──up (pointer still over, hover-capable)──▶ Hovering + activation
//!              ├──up (otherwise)──────────────────────────▶ Idle + activation
//!              └──cancel / leave──────────────────────────▶ Idle
//! ```

use serde::{Deserialize, Serialize};

/// Current pointer feedback phase of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointerPhase {
    #[default]
    Idle,
    Hovering,
    Pressed,
}

impl PointerPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            PointerPhase::Idle => "idle",
            PointerPhase::Hovering => "hovering",
            PointerPhase::Pressed => "pressed",
        }
    }
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Map a DOM `pointerType` string. Unknown types are treated as mouse.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }

    /// Touch contacts have no hover state.
    pub fn supports_hover(self) -> bool {
        !matches!(self, PointerKind::Touch)
    }
}

/// Events a card reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    Enter(PointerKind),
    Leave(PointerKind),
    Down(PointerKind),
    Up(PointerKind),
    Cancel(PointerKind),
    /// Enter key on the focused card
    KeyActivate,
}

/// A completed press/release on the same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation;

/// Transient state of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    feedback: bool,
    entered_viewport: bool,
    phase: PointerPhase,
    pointer_over: bool,
}

impl InteractionState {
    /// New state for a freshly mounted card.
    ///
    /// With `feedback` disabled the card never leaves `Idle` and never
    /// activates; it still plays its entrance.
    pub fn new(feedback: bool) -> Self {
        Self {
            feedback,
            entered_viewport: false,
            phase: PointerPhase::Idle,
            pointer_over: false,
        }
    }

    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    pub fn has_entered_viewport(&self) -> bool {
        self.entered_viewport
    }

    pub fn feedback_enabled(&self) -> bool {
        self.feedback
    }

    /// Mark the card as having been seen. Returns `true` only on the first
    /// call; the flag never resets.
    pub fn enter_viewport(&mut self) -> bool {
        if self.entered_viewport {
            return false;
        }
        self.entered_viewport = true;
        true
    }

    /// Feed one input through the state machine.
    pub fn apply(&mut self, input: CardInput) -> Option<Activation> {
        if !self.feedback {
            return None;
        }

        match input {
            CardInput::Enter(kind) => {
                self.pointer_over = kind.supports_hover();
                if self.pointer_over && self.phase == PointerPhase::Idle {
                    self.phase = PointerPhase::Hovering;
                }
                None
            }
            CardInput::Leave(_) => {
                // Leaving while pressed abandons the press: the release will
                // land on some other element.
                self.pointer_over = false;
                self.phase = PointerPhase::Idle;
                None
            }
            CardInput::Down(kind) => {
                // The press lands on this card, so the pointer is over it
                // even when no enter event preceded it.
                self.pointer_over = kind.supports_hover();
                self.phase = PointerPhase::Pressed;
                None
            }
            CardInput::Up(kind) => {
                if self.phase != PointerPhase::Pressed {
                    return None;
                }
                self.phase = if self.pointer_over && kind.supports_hover() {
                    PointerPhase::Hovering
                } else {
                    PointerPhase::Idle
                };
                Some(Activation)
            }
            CardInput::Cancel(_) => {
                self.pointer_over = false;
                self.phase = PointerPhase::Idle;
                None
            }
            CardInput::KeyActivate => Some(Activation),
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use CardInput::*;
    use PointerKind::*;

    #[test]
    fn hover_then_leave() {
        let mut state = InteractionState::new(true);
        assert_eq!(state.apply(Enter(Mouse)), None);
        assert_eq!(state.phase(), PointerPhase::Hovering);
        state.apply(Leave(Mouse));
        assert_eq!(state.phase(), PointerPhase::Idle);
    }

    #[test]
    fn touch_never_hovers() {
        let mut state = InteractionState::new(true);
        state.apply(Enter(Touch));
        assert_eq!(state.phase(), PointerPhase::Idle);

        state.apply(Down(Touch));
        assert_eq!(state.phase(), PointerPhase::Pressed);
        assert_eq!(state.apply(Up(Touch)), Some(Activation));
        assert_eq!(state.phase(), PointerPhase::Idle);
    }

    #[test]
    fn press_without_enter_releases_to_hover() {
        // Card appeared under a resting cursor: no enter event before the press.
        for kind in [Mouse, Pen] {
            let mut state = InteractionState::new(true);
            state.enter_viewport();
            state.apply(Down(kind));
            assert_eq!(state.phase(), PointerPhase::Pressed);
            assert_eq!(state.apply(Up(kind)), Some(Activation));
            assert_eq!(state.phase(), PointerPhase::Hovering, "{kind:?}");
        }

        let mut state = InteractionState::new(true);
        state.apply(Down(Touch));
        assert_eq!(state.apply(Up(Touch)), Some(Activation));
        assert_eq!(state.phase(), PointerPhase::Idle);
    }

    #[test]
    fn release_over_card_returns_to_hover() {
        let mut state = InteractionState::new(true);
        state.apply(Enter(Mouse));
        state.apply(Down(Mouse));
        assert_eq!(state.apply(Up(Mouse)), Some(Activation));
        assert_eq!(state.phase(), PointerPhase::Hovering);
    }

    #[test]
    fn cancel_does_not_activate() {
        let mut state = InteractionState::new(true);
        state.apply(Enter(Pen));
        state.apply(Down(Pen));
        assert_eq!(state.apply(Cancel(Pen)), None);
        assert_eq!(state.phase(), PointerPhase::Idle);
        assert_eq!(state.apply(Up(Pen)), None);
    }

    #[test]
    fn leave_while_pressed_abandons_press() {
        let mut state = InteractionState::new(true);
        state.apply(Enter(Mouse));
        state.apply(Down(Mouse));
        state.apply(Leave(Mouse));
        assert_eq!(state.phase(), PointerPhase::Idle);
        assert_eq!(state.apply(Up(Mouse)), None);
    }

    #[test]
    fn stray_release_is_ignored() {
        let mut state = InteractionState::new(true);
        state.apply(Enter(Mouse));
        assert_eq!(state.apply(Up(Mouse)), None);
        assert_eq!(state.phase(), PointerPhase::Hovering);
    }

    #[test]
    fn disabled_feedback_stays_idle() {
        let mut state = InteractionState::new(false);
        for input in [Enter(Mouse), Down(Mouse), Up(Mouse), KeyActivate] {
            assert_eq!(state.apply(input), None);
            assert_eq!(state.phase(), PointerPhase::Idle);
        }
        assert!(state.enter_viewport());
    }

    #[test]
    fn keyboard_activation_keeps_phase() {
        let mut state = InteractionState::new(true);
        state.apply(Enter(Mouse));
        assert_eq!(state.apply(KeyActivate), Some(Activation));
        assert_eq!(state.phase(), PointerPhase::Hovering);
    }

    #[test]
    fn viewport_flag_is_monotonic() {
        let mut state = InteractionState::new(true);
        assert!(!state.has_entered_viewport());
        assert!(state.enter_viewport());
        assert!(!state.enter_viewport());
        state.apply(Enter(Mouse));
        state.apply(Leave(Mouse));
        assert!(state.has_entered_viewport());
    }

    #[test]
    fn dom_pointer_types() {
        assert_eq!(PointerKind::from_dom("touch"), Touch);
        assert_eq!(PointerKind::from_dom("pen"), Pen);
        assert_eq!(PointerKind::from_dom("mouse"), Mouse);
        assert_eq!(PointerKind::from_dom(""), Mouse);
    }
}
