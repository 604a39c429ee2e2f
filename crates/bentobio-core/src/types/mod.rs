//! Core types for the bento profile page.
//!
//! Everything here is static configuration: built once at startup and
//! never mutated while the page is on screen.

pub mod card;
pub mod content;
pub mod profile;

pub use card::{CardSpec, Span, DEFAULT_BACKGROUND};
pub use content::{CallToAction, ContentCell, ContentKind, IconToken};
pub use profile::{FooterCredit, ProfileInfo};
