//! Page style context.
//!
//! The theme and motion tuning are handed down explicitly through Dioxus
//! context instead of being read from constants.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! use_context_provider(|| Rc::new(PageStyle::from_page(&page)));
//!
//! // In any child
//! let style = use_page_style();
//! let surface = style.theme.background("discord");
//! ```

use std::rc::Rc;

use bentobio_core::{
    CardStyler, GridSpec, HeaderStyler, NavigationPolicy, PageConfig, Theme, ViewportOptions,
};
use dioxus::prelude::*;

/// Everything components need to style and time themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub theme: Theme,
    pub card_styler: CardStyler,
    pub header_styler: HeaderStyler,
    pub viewport: ViewportOptions,
    pub navigation: NavigationPolicy,
    pub grid: GridSpec,
}

impl PageStyle {
    pub fn from_page(page: &PageConfig) -> Self {
        Self {
            theme: page.theme.clone(),
            card_styler: CardStyler::new(page.motion, &page.theme),
            header_styler: HeaderStyler::new(page.header_motion),
            viewport: page.viewport,
            navigation: page.navigation,
            grid: page.grid,
        }
    }

    /// Stylesheet fragment generated from the tokens: `:root` variables,
    /// the header keyframes and the per-breakpoint grid rules.
    pub fn generated_css(&self) -> String {
        format!(
            "{}{}{}",
            self.theme.css_variables(),
            self.header_styler.keyframes_css(),
            self.grid.breakpoint_css(),
        )
    }
}

/// Hook to access the page style from context.
pub fn use_page_style() -> Rc<PageStyle> {
    use_context::<Rc<PageStyle>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bentobio_core::defaults::default_page;
    use bentobio_core::Breakpoint;

    #[test]
    fn generated_css_has_variables_and_keyframes() {
        let style = PageStyle::from_page(&default_page());
        let css = style.generated_css();
        assert!(css.contains("--bento-page-bg"));
        assert!(css.contains("@keyframes bento-header-enter"));
    }

    #[test]
    fn generated_css_places_cards_per_breakpoint() {
        let style = PageStyle::from_page(&default_page());
        let css = style.generated_css();
        for breakpoint in Breakpoint::ALL {
            let area = format!("var(--bento-area-{})", breakpoint.as_str());
            assert!(css.contains(&area), "missing {area}");
        }
        assert!(css.contains("@media (min-width: 640px)"));
        assert!(css.contains("@media (min-width: 1024px)"));
    }

    #[test]
    fn style_follows_page_navigation_policy() {
        let mut page = default_page();
        page.navigation.delay_ms = 350;
        let style = PageStyle::from_page(&page);
        assert_eq!(style.navigation.delay_ms, 350);
    }
}
