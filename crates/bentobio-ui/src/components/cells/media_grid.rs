//! Media grid cell: account badge, handle, thumbnail grid.

use bentobio_core::{CallToAction, IconToken};
use dioxus::prelude::*;

use super::ActionPill;
use crate::components::Icon;
use crate::context::use_page_style;

/// Account card with a 3-column thumbnail grid.
///
/// The arrow overlay in the corner is only visible while the surrounding
/// card is hovered.
#[component]
pub fn MediaGridCell(
    icon: IconToken,
    /// Palette token behind the account badge
    icon_background: String,
    handle: String,
    #[props(default)] counter: Option<CallToAction>,
    #[props(default)] thumbnails: Vec<String>,
    /// Mirrors the card's Hovering phase
    #[props(default = false)]
    hovering: bool,
) -> Element {
    let style = use_page_style();
    let badge_background = style.theme.background(&icon_background).to_string();
    let hover_class = if hovering { "cell--hovering" } else { "" };
    let overlay_opacity = if hovering { 1 } else { 0 };

    rsx! {
        div { class: "cell cell--media-grid {hover_class}",
            div { class: "cell__row",
                div {
                    class: "cell__badge cell__badge--round",
                    style: "background: {badge_background};",
                    Icon { token: icon, size: 20 }
                }
                if let Some(counter) = counter {
                    ActionPill { action: counter }
                }
            }

            div { class: "cell__handle", "{handle}" }

            div { class: "cell__thumbnails",
                for (i, url) in thumbnails.iter().enumerate() {
                    div { key: "{i}", class: "cell__thumbnail",
                        img { src: "{url}", alt: "post", "loading": "lazy" }
                    }
                }
            }

            div {
                class: "cell__overlay-arrow",
                style: "opacity: {overlay_opacity};",
                Icon { token: IconToken::ArrowUpRight, size: 16 }
            }
        }
    }
}
