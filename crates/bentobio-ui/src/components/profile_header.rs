//! Page header: avatar, name, tagline.

use bentobio_core::{CardInput, InteractionState, ProfileInfo};
use dioxus::prelude::*;

use super::pointer_input;
use crate::context::use_page_style;

/// Fades in from slightly above once when the page appears. The avatar
/// scales up on hover and down while pressed.
#[component]
pub fn ProfileHeader(profile: ProfileInfo) -> Element {
    let style = use_page_style();
    let mut avatar = use_signal(|| InteractionState::new(true));

    let block_style = style.header_styler.block_style().to_string();
    let avatar_style = style.header_styler.avatar_style(avatar.read().phase());

    let mut feed = move |input: Option<CardInput>| {
        if let Some(input) = input {
            avatar.write().apply(input);
        }
    };

    rsx! {
        header { class: "bento-header", style: "{block_style}",
            div {
                class: "bento-header__avatar",
                style: "{avatar_style}",
                onpointerenter: move |e| feed(pointer_input(&e, CardInput::Enter)),
                onpointerleave: move |e| feed(pointer_input(&e, CardInput::Leave)),
                onpointerdown: move |e| feed(pointer_input(&e, CardInput::Down)),
                onpointerup: move |e| feed(pointer_input(&e, CardInput::Up)),
                onpointercancel: move |e| feed(pointer_input(&e, CardInput::Cancel)),
                img { src: "{profile.avatar_url}", alt: "{profile.display_name}" }
            }
            h1 { class: "bento-header__name", "{profile.display_name}" }
            p { class: "bento-header__tagline", "{profile.tagline}" }
            if !profile.handle.is_empty() {
                p { class: "bento-header__handle", "{profile.handle}" }
            }
        }
    }
}
