use bentobio_core::FooterCredit as Credit;
use dioxus::prelude::*;

/// Small mark and the author's name under the grid. Dim until hovered.
#[component]
pub fn FooterCredit(credit: Credit) -> Element {
    rsx! {
        footer { class: "bento-footer",
            div { class: "bento-footer__mark",
                div { class: "bento-footer__dot" }
            }
            span { class: "bento-footer__name", "{credit.name}" }
        }
    }
}
