//! Content cell templates.
//!
//! Cells are static: they render inside a [`CardContainer`](super::CardContainer)
//! and at most mirror its pointer phase visually. None of them handles
//! events.

mod action_pill;
mod brand_panel;
mod icon_text;
mod map_pin;
mod media_grid;
mod preview_link;

pub use action_pill::ActionPill;
pub use brand_panel::BrandPanelCell;
pub use icon_text::IconTextCell;
pub use map_pin::MapPinCell;
pub use media_grid::MediaGridCell;
pub use preview_link::PreviewLinkCell;

use bentobio_core::{ContentCell, PointerPhase};
use dioxus::prelude::*;

/// Render the template matching `cell`.
#[component]
pub fn CellView(cell: ContentCell, phase: PointerPhase) -> Element {
    let hovering = phase == PointerPhase::Hovering;

    match cell {
        ContentCell::MediaGrid {
            icon,
            icon_background,
            handle,
            counter,
            thumbnails,
        } => rsx! {
            MediaGridCell { icon, icon_background, handle, counter, thumbnails, hovering }
        },
        ContentCell::MapPin { image_url, label } => rsx! {
            MapPinCell { image_url, label }
        },
        ContentCell::IconText {
            icon,
            icon_background,
            title,
            subtitle,
            action,
        } => rsx! {
            IconTextCell { icon, icon_background, title, subtitle, action }
        },
        ContentCell::BrandPanel {
            icon,
            title,
            subtitle,
        } => rsx! {
            BrandPanelCell { icon, title, subtitle }
        },
        ContentCell::PreviewLink {
            icon,
            title,
            subtitle,
        } => rsx! {
            PreviewLinkCell { icon, title, subtitle }
        },
    }
}
