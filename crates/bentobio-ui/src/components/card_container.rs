//! The interactive card shell.

use std::sync::Arc;

use bentobio_core::{CardInput, CardSpec, DeferredNavigator, InteractionState};
use dioxus::prelude::*;

use super::{pointer_input, CellView};
use crate::context::use_page_style;
use crate::platform::{observe_entrance, release_entrance, EvalNavigator};

/// Rounded, elevated card wrapping one content cell.
///
/// Owns everything interactive about the card: its entrance, its pointer
/// phase and the delayed navigation after a press. Cards without a
/// destination render the same surface with feedback disabled.
///
/// # Props
///
/// * `spec` - The card to render
/// * `index` - Position on the page, used for the element id
/// * `areas` - Grid area variables from [`area_variables`](super::area_variables)
#[component]
pub fn CardContainer(spec: CardSpec, index: usize, areas: String) -> Element {
    let style = use_page_style();
    let interactive = spec.is_interactive();
    let mut state = use_signal(|| InteractionState::new(interactive));
    let navigator = use_hook(|| DeferredNavigator::new(Arc::new(EvalNavigator), style.navigation));

    let element_id = format!("bento-card-{index}");
    let kind = spec.content.kind();
    let destination = spec.destination.clone();

    let on_input = use_callback(move |input: CardInput| {
        let activation = state.write().apply(input);
        if activation.is_none() {
            return;
        }
        let Some(url) = destination.clone() else {
            return;
        };
        tracing::debug!(card = index, kind = kind.as_str(), "Card activated");
        // Navigation outlives the card if it unmounts during the delay.
        if let Some(navigation) = navigator.activate(url) {
            spawn_forever(navigation);
        }
    });

    let released_id = element_id.clone();
    use_drop(move || release_entrance(&released_id));

    let viewport = style.viewport;
    let observed_id = element_id.clone();
    let phase = state.read().phase();
    let surface = style.theme.background(&spec.background).to_string();
    let motion_style = style.card_styler.style(&state.read());
    let inert_class = if interactive { "" } else { "bento-card--inert" };
    let kind_class = kind.as_str();
    let phase_class = phase.as_str();

    rsx! {
        a {
            id: "{element_id}",
            class: "bento-card bento-card--{kind_class} is-{phase_class} {inert_class}",
            style: "{areas} background: {surface}; {motion_style}",
            href: spec.destination.clone(),
            target: "_blank",
            rel: "noopener noreferrer",
            tabindex: if interactive { "0" } else { "-1" },
            draggable: "false",

            onmounted: move |_| {
                let observed_id = observed_id.clone();
                async move {
                    if observe_entrance(viewport, observed_id).await && state.write().enter_viewport() {
                        tracing::trace!(card = index, "Card entered viewport");
                    }
                }
            },
            // The delayed navigation replaces the webview's own link handling.
            onclick: move |e| e.prevent_default(),
            onpointerenter: move |e| {
                if let Some(input) = pointer_input(&e, CardInput::Enter) {
                    on_input.call(input);
                }
            },
            onpointerleave: move |e| {
                if let Some(input) = pointer_input(&e, CardInput::Leave) {
                    on_input.call(input);
                }
            },
            onpointerdown: move |e| {
                if let Some(input) = pointer_input(&e, CardInput::Down) {
                    on_input.call(input);
                }
            },
            onpointerup: move |e| {
                if let Some(input) = pointer_input(&e, CardInput::Up) {
                    on_input.call(input);
                }
            },
            onpointercancel: move |e| {
                if let Some(input) = pointer_input(&e, CardInput::Cancel) {
                    on_input.call(input);
                }
            },
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    e.prevent_default();
                    on_input.call(CardInput::KeyActivate);
                }
            },

            CellView { cell: spec.content.clone(), phase }
        }
    }
}
