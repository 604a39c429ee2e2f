//! Map pin cell.

use bentobio_core::IconToken;
use dioxus::prelude::*;

use crate::components::Icon;

/// Full-bleed map image, pulsing pin in the middle, label bottom-left.
#[component]
pub fn MapPinCell(image_url: String, label: String) -> Element {
    rsx! {
        div { class: "cell cell--map-pin",
            div { class: "cell__map",
                img { src: "{image_url}", alt: "{label}" }
                div { class: "cell__map-shade" }
            }

            div { class: "cell__pin",
                span { class: "cell__pin-ping" }
                div { class: "cell__pin-dot",
                    Icon { token: IconToken::MapPin, size: 20, filled: true }
                }
            }

            div { class: "cell__map-label", "{label}" }
        }
    }
}
