//! Style tokens for the page.
//!
//! A small immutable record handed to every component through context, so
//! nothing reads colors from ambient globals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_BACKGROUND;

/// Colors, shapes and the background palette shared by all cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub page_background: String,
    pub text_primary: String,
    pub text_muted: String,
    pub text_subtle: String,
    pub font_family: String,
    pub card_radius_px: u32,
    pub card_padding_px: u32,
    pub shadow_rest: String,
    pub shadow_raised: String,
    /// Background token -> CSS background value
    pub palette: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let palette = [
            (DEFAULT_BACKGROUND, "#ffffff"),
            ("muted", "#f3f4f6"),
            ("black", "#000000"),
            ("blue", "#3b82f6"),
            ("facebook", "#1877f2"),
            ("discord", "#5865f2"),
            ("tiktok", "#ff0050"),
            ("orange", "#f97316"),
            ("map", "#dbeafe"),
            (
                "instagram",
                "linear-gradient(to top right, #facc15, #ef4444, #a855f7)",
            ),
        ]
        .into_iter()
        .map(|(token, css)| (token.to_string(), css.to_string()))
        .collect();

        Self {
            page_background: "#f3f4f6".into(),
            text_primary: "#111827".into(),
            text_muted: "#6b7280".into(),
            text_subtle: "#9ca3af".into(),
            font_family: "ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif".into(),
            card_radius_px: 32,
            card_padding_px: 24,
            shadow_rest: "0 1px 2px rgba(0, 0, 0, 0.05)".into(),
            shadow_raised: "0px 10px 30px rgba(0, 0, 0, 0.1)".into(),
            palette,
        }
    }
}

impl Theme {
    /// Whether `token` is defined in the palette.
    pub fn has_token(&self, token: &str) -> bool {
        self.palette.contains_key(token)
    }

    /// CSS background for a token, falling back to the default surface.
    pub fn background(&self, token: &str) -> &str {
        if let Some(css) = self.palette.get(token) {
            return css;
        }
        tracing::warn!(token, "Unknown background token, using default surface");
        self.palette
            .get(DEFAULT_BACKGROUND)
            .map(String::as_str)
            .unwrap_or("#ffffff")
    }

    /// `:root` custom properties consumed by the global stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --bento-page-bg: {};\n  --bento-text: {};\n  --bento-text-muted: {};\n  --bento-text-subtle: {};\n  --bento-font: {};\n  --bento-radius: {}px;\n  --bento-padding: {}px;\n  --bento-shadow-rest: {};\n  --bento-shadow-raised: {};\n}}\n",
            self.page_background,
            self.text_primary,
            self.text_muted,
            self.text_subtle,
            self.font_family,
            self.card_radius_px,
            self.card_padding_px,
            self.shadow_rest,
            self.shadow_raised,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_covers_builtin_page() {
        let theme = Theme::default();
        for token in [
            "default", "muted", "black", "blue", "facebook", "discord", "tiktok", "orange",
            "instagram",
        ] {
            assert!(theme.has_token(token), "missing {token}");
        }
        assert_eq!(theme.background("discord"), "#5865f2");
    }

    #[test]
    fn unknown_token_falls_back_to_surface() {
        let theme = Theme::default();
        assert_eq!(theme.background("neon"), "#ffffff");
    }

    #[test]
    fn css_variables_include_shadows() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--bento-shadow-raised: 0px 10px 30px rgba(0, 0, 0, 0.1);"));
        assert!(css.contains("--bento-radius: 32px;"));
    }

    #[test]
    fn partial_theme_keeps_defaults() {
        let theme: Theme = serde_json::from_str(r##"{ "page_background": "#000" }"##).unwrap();
        assert_eq!(theme.page_background, "#000");
        assert_eq!(theme.card_radius_px, 32);
        assert!(theme.has_token("discord"));
    }
}
