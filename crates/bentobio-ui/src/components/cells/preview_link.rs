//! Preview link cell.

use bentobio_core::IconToken;
use dioxus::prelude::*;

use crate::components::Icon;

/// Horizontal row: icon tile, title/subtitle, trailing arrow.
#[component]
pub fn PreviewLinkCell(icon: IconToken, title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "cell cell--preview-link",
            div { class: "cell__tile",
                Icon { token: icon, size: 24 }
            }
            div { class: "cell__text cell__text--truncate",
                h3 { class: "cell__title", "{title}" }
                p { class: "cell__subtitle", "{subtitle}" }
            }
            div { class: "cell__trailing",
                Icon { token: IconToken::ArrowUpRight, size: 20 }
            }
        }
    }
}
