use dioxus::prelude::*;

use crate::context::{get_page, page_style};
use crate::pages::Bio;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The bio page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Bio {},
}

/// Root application component.
///
/// Provides global styles, the page style context, and routing.
#[component]
pub fn App() -> Element {
    let style = use_context_provider(|| page_style(&get_page()));
    let generated_css = style.generated_css();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {generated_css} }
        Router::<Route> {}
    }
}
