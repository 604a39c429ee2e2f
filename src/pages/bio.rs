//! The bio page: header, card grid, credit.

use bentobio_ui::{FooterCredit, GridComposer, ProfileHeader};
use dioxus::prelude::*;

use crate::context::get_page;

#[component]
pub fn Bio() -> Element {
    let page = use_hook(get_page);

    rsx! {
        main { class: "bento-page",
            div { class: "bento-page__inner",
                ProfileHeader { profile: page.profile.clone() }
                GridComposer { cards: page.cards.clone() }
                if let Some(credit) = page.footer.clone() {
                    FooterCredit { credit }
                }
            }
        }
    }
}
