//! Icon + text cell.

use bentobio_core::{CallToAction, IconToken};
use dioxus::prelude::*;

use super::ActionPill;
use crate::components::Icon;
use crate::context::use_page_style;

/// Icon badge on top, title and subtitle at the bottom, optional pill.
#[component]
pub fn IconTextCell(
    icon: IconToken,
    icon_background: String,
    title: String,
    subtitle: String,
    #[props(default)] action: Option<CallToAction>,
) -> Element {
    let style = use_page_style();
    let badge_background = style.theme.background(&icon_background).to_string();

    rsx! {
        div { class: "cell cell--icon-text",
            div {
                class: "cell__badge",
                style: "background: {badge_background};",
                Icon { token: icon, size: 24 }
            }
            div { class: "cell__text",
                h3 { class: "cell__title", "{title}" }
                p { class: "cell__subtitle", "{subtitle}" }
                if let Some(action) = action {
                    ActionPill { action, block: true }
                }
            }
        }
    }
}
