//! Content cell templates.
//!
//! The set of card kinds is closed. Each variant carries only the data its
//! template needs; the card container around it owns every interaction.

use serde::{Deserialize, Serialize};

/// Icon glyphs available to content cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconToken {
    Instagram,
    MapPin,
    MessageCircle,
    Music,
    Link,
    Facebook,
    AtSign,
    Globe,
    ArrowUpRight,
}

impl IconToken {
    pub const ALL: [IconToken; 9] = [
        IconToken::Instagram,
        IconToken::MapPin,
        IconToken::MessageCircle,
        IconToken::Music,
        IconToken::Link,
        IconToken::Facebook,
        IconToken::AtSign,
        IconToken::Globe,
        IconToken::ArrowUpRight,
    ];

    /// Accessible name for the glyph.
    pub fn label(self) -> &'static str {
        match self {
            IconToken::Instagram => "Instagram",
            IconToken::MapPin => "Map pin",
            IconToken::MessageCircle => "Chat",
            IconToken::Music => "Music",
            IconToken::Link => "Link",
            IconToken::Facebook => "Facebook",
            IconToken::AtSign => "At sign",
            IconToken::Globe => "Globe",
            IconToken::ArrowUpRight => "Open",
        }
    }
}

/// Pill-shaped label such as a follower counter.
///
/// Purely visual: activating it activates the whole card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    /// Palette token for the pill
    pub background: String,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background: background.into(),
        }
    }
}

/// What a card shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentCell {
    /// Account badge, handle and a 3-column thumbnail grid. An arrow
    /// overlay appears while the card is hovered.
    MediaGrid {
        icon: IconToken,
        icon_background: String,
        handle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        counter: Option<CallToAction>,
        #[serde(default)]
        thumbnails: Vec<String>,
    },
    /// Full-bleed map image with a pulsing pin and a location label.
    MapPin { image_url: String, label: String },
    /// Icon badge on top, title and subtitle at the bottom.
    IconText {
        icon: IconToken,
        icon_background: String,
        title: String,
        subtitle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<CallToAction>,
    },
    /// Bare icon on a brand-colored surface with light text.
    BrandPanel {
        icon: IconToken,
        title: String,
        subtitle: String,
    },
    /// Horizontal row: icon tile, title/subtitle, trailing arrow.
    PreviewLink {
        icon: IconToken,
        title: String,
        subtitle: String,
    },
}

/// Discriminant of [`ContentCell`], handy for logging and class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    MediaGrid,
    MapPin,
    IconText,
    BrandPanel,
    PreviewLink,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::MediaGrid => "media-grid",
            ContentKind::MapPin => "map-pin",
            ContentKind::IconText => "icon-text",
            ContentKind::BrandPanel => "brand-panel",
            ContentKind::PreviewLink => "preview-link",
        }
    }
}

impl ContentCell {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentCell::MediaGrid { .. } => ContentKind::MediaGrid,
            ContentCell::MapPin { .. } => ContentKind::MapPin,
            ContentCell::IconText { .. } => ContentKind::IconText,
            ContentCell::BrandPanel { .. } => ContentKind::BrandPanel,
            ContentCell::PreviewLink { .. } => ContentKind::PreviewLink,
        }
    }

    /// Text used as the card's accessible label.
    pub fn title(&self) -> &str {
        match self {
            ContentCell::MediaGrid { handle, .. } => handle,
            ContentCell::MapPin { label, .. } => label,
            ContentCell::IconText { title, .. }
            | ContentCell::BrandPanel { title, .. }
            | ContentCell::PreviewLink { title, .. } => title,
        }
    }

    /// Every palette token this cell refers to (card surface excluded).
    pub fn style_tokens(&self) -> Vec<&str> {
        match self {
            ContentCell::MediaGrid {
                icon_background,
                counter,
                ..
            } => {
                let mut tokens = vec![icon_background.as_str()];
                tokens.extend(counter.iter().map(|c| c.background.as_str()));
                tokens
            }
            ContentCell::IconText {
                icon_background,
                action,
                ..
            } => {
                let mut tokens = vec![icon_background.as_str()];
                tokens.extend(action.iter().map(|a| a.background.as_str()));
                tokens
            }
            ContentCell::MapPin { .. }
            | ContentCell::BrandPanel { .. }
            | ContentCell::PreviewLink { .. } => Vec::new(),
        }
    }
}
