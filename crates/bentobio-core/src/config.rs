//! Page configuration: everything a page needs, loaded once at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::grid::GridSpec;
use crate::motion::{CardMotion, HeaderMotion};
use crate::navigation::NavigationPolicy;
use crate::theme::Theme;
use crate::types::{CardSpec, FooterCredit, ProfileInfo};
use crate::viewport::ViewportOptions;

/// Complete description of one profile page.
///
/// Only `profile` and `cards` are required in a file; every other section
/// falls back to the stock tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub profile: ProfileInfo,
    pub cards: Vec<CardSpec>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub motion: CardMotion,
    #[serde(default)]
    pub header_motion: HeaderMotion,
    #[serde(default)]
    pub viewport: ViewportOptions,
    #[serde(default)]
    pub navigation: NavigationPolicy,
    #[serde(default)]
    pub grid: GridSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterCredit>,
}

impl PageConfig {
    /// A page with stock theme and tuning.
    pub fn new(profile: ProfileInfo, cards: Vec<CardSpec>) -> Self {
        Self {
            profile,
            cards,
            theme: Theme::default(),
            motion: CardMotion::default(),
            header_motion: HeaderMotion::default(),
            viewport: ViewportOptions::default(),
            navigation: NavigationPolicy::default(),
            grid: GridSpec::default(),
            footer: None,
        }
    }

    pub fn with_footer(mut self, name: impl Into<String>) -> Self {
        self.footer = Some(FooterCredit { name: name.into() });
        self
    }

    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        let page: PageConfig = serde_json::from_str(source)?;
        page.validate()?;
        Ok(page)
    }

    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let page: PageConfig = toml::from_str(source)?;
        page.validate()?;
        Ok(page)
    }

    /// Load and validate a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let page = match extension.as_str() {
            "json" => Self::from_json_str(&source)?,
            "toml" => Self::from_toml_str(&source)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        tracing::info!(
            path = %path.display(),
            cards = page.cards.len(),
            "Loaded page configuration"
        );
        Ok(page)
    }

    /// Structural checks. Destination URLs are not checked.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.profile.display_name.trim().is_empty() {
            return Err(ConfigError::EmptyDisplayName);
        }
        if self.cards.is_empty() {
            return Err(ConfigError::NoCards);
        }

        for (index, card) in self.cards.iter().enumerate() {
            let tokens = std::iter::once(card.background.as_str()).chain(card.content.style_tokens());
            for token in tokens {
                if !self.theme.has_token(token) {
                    return Err(ConfigError::UnknownStyleToken {
                        card: index,
                        token: token.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentCell, IconToken};

    fn minimal_json() -> &'static str {
        r#"{
            "profile": {
                "display_name": "Ada",
                "tagline": "Engines",
                "avatar_url": "https://example.com/ada.png"
            },
            "cards": [
                {
                    "destination": "https://example.com",
                    "background": "discord",
                    "content": {
                        "kind": "brand_panel",
                        "icon": "message_circle",
                        "title": "Chat",
                        "subtitle": "example.com"
                    }
                }
            ]
        }"#
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let page = PageConfig::from_json_str(minimal_json()).unwrap();
        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.navigation, NavigationPolicy::default());
        assert_eq!(page.motion, CardMotion::default());
        assert!(page.footer.is_none());
        assert_eq!(page.profile.handle, "");
    }

    #[test]
    fn toml_page() {
        let source = r#"
            [profile]
            display_name = "Ada"
            tagline = "Engines"
            avatar_url = "https://example.com/ada.png"

            [navigation]
            delay_ms = 250

            [[cards]]
            destination = "https://maps.example.com"
            column_span = 2
            row_span = 2

            [cards.content]
            kind = "map_pin"
            image_url = "https://example.com/map.jpg"
            label = "London"
        "#;
        let page = PageConfig::from_toml_str(source).unwrap();
        assert_eq!(page.navigation.delay_ms, 250);
        assert_eq!(page.cards[0].column_span.tracks(), 2);
        assert_eq!(page.cards[0].content.title(), "London");
    }

    #[test]
    fn rejects_unknown_token() {
        let source = minimal_json().replace("\"discord\"", "\"vaporwave\"");
        let err = PageConfig::from_json_str(&source).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownStyleToken { card: 0, ref token } if token == "vaporwave"
        ));
    }

    #[test]
    fn rejects_empty_pages() {
        let profile = ProfileInfo::new("Ada", "", "a.png", "@ada");
        let page = PageConfig::new(profile.clone(), Vec::new());
        assert!(matches!(page.validate(), Err(ConfigError::NoCards)));

        let card = CardSpec::new(ContentCell::PreviewLink {
            icon: IconToken::Globe,
            title: "Site".into(),
            subtitle: "example.com".into(),
        });
        let mut page = PageConfig::new(profile, vec![card]);
        page.profile.display_name = "  ".into();
        assert!(matches!(page.validate(), Err(ConfigError::EmptyDisplayName)));
    }

    #[test]
    fn malformed_destination_is_not_validated() {
        let source = minimal_json().replace("https://example.com\"", "not a url\"");
        let page = PageConfig::from_json_str(&source).unwrap();
        assert_eq!(page.cards[0].destination.as_deref(), Some("not a url"));
    }
}
