//! Bento Bio UI Components
//!
//! Dioxus components for a bento-style link-in-bio page.
//!
//! ## Structure
//!
//! - [`CardContainer`]: the only interactive surface. Owns its pointer
//!   phase, plays its entrance once, defers navigation.
//! - Content cells: static templates rendered inside a card, selected by
//!   [`CellView`] from the card's [`ContentCell`](bentobio_core::ContentCell).
//! - [`GridComposer`]: places cards in a 1/2/4-column grid.
//! - [`ProfileHeader`] and [`FooterCredit`]: page chrome.
//!
//! All styling values come from a [`PageStyle`] provided through context.

pub mod components;
pub mod context;
pub mod platform;

pub use components::*;
pub use context::{use_page_style, PageStyle};
