//! Card specification: one entry per visible card in the grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::content::ContentCell;
use crate::error::ConfigError;

/// Background token used when a card does not name one.
pub const DEFAULT_BACKGROUND: &str = "default";

/// Number of grid tracks a card covers along one axis.
///
/// Only single and double spans exist; anything else is rejected when the
/// configuration is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Span {
    #[default]
    One,
    Two,
}

impl Span {
    /// Track count as a plain number.
    pub fn tracks(self) -> u16 {
        match self {
            Span::One => 1,
            Span::Two => 2,
        }
    }
}

impl TryFrom<u8> for Span {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Span::One),
            2 => Ok(Span::Two),
            other => Err(ConfigError::InvalidSpan(other)),
        }
    }
}

impl From<Span> for u8 {
    fn from(span: Span) -> Self {
        span.tracks() as u8
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tracks())
    }
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

/// One card in the grid.
///
/// Order inside the page's card list is significant: it is the flow order
/// used to place cards, so smaller cards fill in around larger ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Outbound link. A card without one is purely decorative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default)]
    pub column_span: Span,
    #[serde(default)]
    pub row_span: Span,
    /// Palette token for the card surface
    #[serde(default = "default_background")]
    pub background: String,
    pub content: ContentCell,
}

impl CardSpec {
    /// A 1x1 card on the default surface with no destination.
    pub fn new(content: ContentCell) -> Self {
        Self {
            destination: None,
            column_span: Span::One,
            row_span: Span::One,
            background: default_background(),
            content,
        }
    }

    pub fn with_destination(mut self, url: impl Into<String>) -> Self {
        self.destination = Some(url.into());
        self
    }

    pub fn with_spans(mut self, column_span: Span, row_span: Span) -> Self {
        self.column_span = column_span;
        self.row_span = row_span;
        self
    }

    pub fn with_background(mut self, token: impl Into<String>) -> Self {
        self.background = token.into();
        self
    }

    /// Whether activating this card navigates anywhere.
    pub fn is_interactive(&self) -> bool {
        self.destination.is_some()
    }
}
