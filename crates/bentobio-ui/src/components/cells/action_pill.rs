//! Counter / follow pill.

use bentobio_core::CallToAction;
use dioxus::prelude::*;

use crate::context::use_page_style;

/// Rounded label on a palette color. Decorative: the card handles clicks.
#[component]
pub fn ActionPill(
    action: CallToAction,
    /// Stretch to the width of the cell
    #[props(default = false)]
    block: bool,
) -> Element {
    let style = use_page_style();
    let background = style.theme.background(&action.background).to_string();
    let block_class = if block { "action-pill--block" } else { "" };

    rsx! {
        span {
            class: "action-pill {block_class}",
            style: "background: {background};",
            "{action.label}"
        }
    }
}
