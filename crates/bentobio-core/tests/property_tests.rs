//! Property-based tests for grid placement and card interaction
//!
//! Uses proptest to check the invariants that must hold for any page and
//! any sequence of pointer events.

use proptest::prelude::*;

use bentobio_core::{
    Breakpoint, CardInput, CardMotion, GridLayout, InteractionState, PointerKind, PointerPhase,
    Span,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn span_strategy() -> impl Strategy<Value = Span> {
    prop_oneof![Just(Span::One), Just(Span::Two)]
}

fn spans_strategy(max_cards: usize) -> impl Strategy<Value = Vec<(Span, Span)>> {
    prop::collection::vec((span_strategy(), span_strategy()), 0..max_cards)
}

fn breakpoint_strategy() -> impl Strategy<Value = Breakpoint> {
    prop_oneof![
        Just(Breakpoint::Narrow),
        Just(Breakpoint::Medium),
        Just(Breakpoint::Wide),
    ]
}

fn kind_strategy() -> impl Strategy<Value = PointerKind> {
    prop_oneof![
        Just(PointerKind::Mouse),
        Just(PointerKind::Pen),
        Just(PointerKind::Touch),
    ]
}

/// Everything a card can be told, including visibility reports.
#[derive(Debug, Clone)]
enum CardOp {
    Input(CardInput),
    Visible,
}

fn op_strategy() -> impl Strategy<Value = CardOp> {
    prop_oneof![
        3 => kind_strategy().prop_map(|k| CardOp::Input(CardInput::Enter(k))),
        3 => kind_strategy().prop_map(|k| CardOp::Input(CardInput::Leave(k))),
        3 => kind_strategy().prop_map(|k| CardOp::Input(CardInput::Down(k))),
        3 => kind_strategy().prop_map(|k| CardOp::Input(CardInput::Up(k))),
        1 => kind_strategy().prop_map(|k| CardOp::Input(CardInput::Cancel(k))),
        1 => Just(CardOp::Input(CardInput::KeyActivate)),
        2 => Just(CardOp::Visible),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// No two cards ever share a grid cell
    #[test]
    fn placements_never_overlap(spans in spans_strategy(24), breakpoint in breakpoint_strategy()) {
        let layout = GridLayout::from_spans(spans.clone(), breakpoint);
        prop_assert_eq!(layout.placements.len(), spans.len());

        for (i, a) in layout.placements.iter().enumerate() {
            for b in layout.placements.iter().skip(i + 1) {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    /// Every card fits within the column count
    #[test]
    fn placements_stay_inside_columns(spans in spans_strategy(24), breakpoint in breakpoint_strategy()) {
        let layout = GridLayout::from_spans(spans, breakpoint);
        for placement in &layout.placements {
            prop_assert!(placement.column_end() <= breakpoint.columns());
            prop_assert!(placement.row_end() <= layout.rows);
        }
    }

    /// On the wide grid spans are never clamped, and flow order is kept
    #[test]
    fn wide_grid_keeps_spans_and_order(spans in spans_strategy(24)) {
        let layout = GridLayout::from_spans(spans.clone(), Breakpoint::Wide);
        for (placement, (column_span, row_span)) in layout.placements.iter().zip(&spans) {
            prop_assert_eq!(placement.column_span, column_span.tracks());
            prop_assert_eq!(placement.row_span, row_span.tracks());
        }
        for pair in layout.placements.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!((b.row, b.column) > (a.row, a.column), "{:?} placed before {:?}", b, a);
        }
    }

    /// The entrance flag flips at most once, whatever happens to the card
    #[test]
    fn entrance_happens_at_most_once(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut state = InteractionState::new(true);
        let mut entrances = 0;
        let mut seen = false;

        for op in ops {
            match op {
                CardOp::Input(input) => {
                    state.apply(input);
                }
                CardOp::Visible => {
                    if state.enter_viewport() {
                        entrances += 1;
                    }
                }
            }
            // Monotonic: once seen, always seen.
            if seen {
                prop_assert!(state.has_entered_viewport());
            }
            seen = state.has_entered_viewport();
        }
        prop_assert!(entrances <= 1);
    }

    /// Pressed always looks pressed in, with no rotation
    #[test]
    fn pressed_pose_is_pressed_in(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let motion = CardMotion::default();
        let mut state = InteractionState::new(true);
        state.enter_viewport();

        for op in ops {
            if let CardOp::Input(input) = op {
                state.apply(input);
            }
            if state.phase() == PointerPhase::Pressed {
                let (pose, _) = motion.resolve(&state);
                prop_assert!(pose.scale < motion.rest.scale);
                prop_assert_eq!(pose.rotate_deg, 0.0);
            }
        }
    }

    /// Activations only come out of a release that ends a press, or the keyboard
    #[test]
    fn activation_requires_press_or_key(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut state = InteractionState::new(true);

        for op in ops {
            if let CardOp::Input(input) = op {
                let before = state.phase();
                let activated = state.apply(input).is_some();
                if activated {
                    let from_release = matches!(input, CardInput::Up(_)) && before == PointerPhase::Pressed;
                    prop_assert!(from_release || input == CardInput::KeyActivate);
                }
            }
        }
    }

    /// Touch input never produces a hover phase
    #[test]
    fn touch_never_hovers(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut state = InteractionState::new(true);
        for op in ops {
            if let CardOp::Input(input) = op {
                let touch_only = match input {
                    CardInput::Enter(k) | CardInput::Leave(k) | CardInput::Down(k)
                    | CardInput::Up(k) | CardInput::Cancel(k) => k == PointerKind::Touch,
                    CardInput::KeyActivate => true,
                };
                if !touch_only {
                    continue;
                }
                state.apply(input);
                prop_assert_ne!(state.phase(), PointerPhase::Hovering);
            }
        }
    }
}
