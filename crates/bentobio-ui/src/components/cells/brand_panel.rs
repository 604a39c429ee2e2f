//! Brand-colored cell. The color itself is the card's background token.

use bentobio_core::IconToken;
use dioxus::prelude::*;

use crate::components::Icon;

#[component]
pub fn BrandPanelCell(icon: IconToken, title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "cell cell--brand-panel",
            Icon { token: icon, size: 32 }
            div { class: "cell__text",
                h3 { class: "cell__title cell__title--large", "{title}" }
                p { class: "cell__subtitle", "{subtitle}" }
            }
        }
    }
}
