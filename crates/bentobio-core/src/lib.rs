//! Bento Bio Core Library
//!
//! Renderer-independent logic behind a bento-style link-in-bio page: a
//! profile header above a responsive grid of cards, each linking out.
//!
//! ## Overview
//!
//! The interesting part of the page is the card container. Each card:
//!
//! - takes a cell area in a 1/2/4-column grid ([`grid`])
//! - animates in once, the first time it scrolls into view ([`viewport`])
//! - gives spring-physics hover and fast press feedback ([`interaction`],
//!   [`motion`])
//! - opens its destination in a new tab a short moment after activation,
//!   so the press animation can finish ([`navigation`])
//!
//! Everything else (what a card shows, the profile data, colors) is
//! static configuration ([`types`], [`theme`], [`config`]).
//!
//! ## Quick Start
//!
//! ```ignore
//! use bentobio_core::{defaults, Breakpoint, GridLayout, InteractionState, CardInput, PointerKind};
//!
//! let page = defaults::default_page();
//! let layout = GridLayout::for_cards(&page.cards, Breakpoint::Wide);
//! println!("{}", layout.ascii());
//!
//! let mut state = InteractionState::new(true);
//! state.enter_viewport();
//! state.apply(CardInput::Enter(PointerKind::Mouse));
//! state.apply(CardInput::Down(PointerKind::Mouse));
//! assert!(state.apply(CardInput::Up(PointerKind::Mouse)).is_some());
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod logging;
pub mod motion;
pub mod navigation;
pub mod theme;
pub mod types;
pub mod viewport;

// Re-exports
pub use config::PageConfig;
pub use error::{ConfigError, ConfigResult};
pub use grid::{Breakpoint, GridFlow, GridLayout, GridSpec, Placement};
pub use interaction::{Activation, CardInput, InteractionState, PointerKind, PointerPhase};
pub use motion::{CardMotion, CardStyler, HeaderMotion, HeaderStyler, Pose, SpringConfig, Transition, Tween};
pub use navigation::{DeferredNavigator, LinkTarget, NavigationPolicy, Navigator, RepeatPolicy};
pub use theme::Theme;
pub use types::*;
pub use viewport::ViewportOptions;
