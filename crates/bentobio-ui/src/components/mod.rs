//! Page components.

mod card_container;
pub mod cells;
mod footer_credit;
mod grid_composer;
mod icon;
mod profile_header;

pub use card_container::CardContainer;
pub use cells::CellView;
pub use footer_credit::FooterCredit;
pub use grid_composer::{area_variables, grid_variables, GridComposer};
pub use icon::Icon;
pub use profile_header::ProfileHeader;

use bentobio_core::{CardInput, PointerKind};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

/// Translate a DOM pointer event into a card input.
///
/// Secondary and middle buttons never press a card, so `Down`/`Up` from
/// them map to `None`.
pub(crate) fn pointer_input(
    event: &PointerEvent,
    make: fn(PointerKind) -> CardInput,
) -> Option<CardInput> {
    let kind = PointerKind::from_dom(&event.data().pointer_type());
    let input = make(kind);
    let is_button_edge = matches!(input, CardInput::Down(_) | CardInput::Up(_));
    if is_button_edge {
        match event.trigger_button() {
            Some(MouseButton::Primary) | None => {}
            Some(_) => return None,
        }
    }
    Some(input)
}
