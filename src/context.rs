//! Page context for the desktop app.
//!
//! The page config is read once in `main`; components get the derived
//! [`PageStyle`] through `use_page_style()` from `bentobio_ui`.

use std::rc::Rc;

use bentobio_core::PageConfig;
use bentobio_ui::PageStyle;

/// Get the page loaded at startup.
pub fn get_page() -> PageConfig {
    crate::get_page()
}

/// Style context for `page`.
pub fn page_style(page: &PageConfig) -> Rc<PageStyle> {
    Rc::new(PageStyle::from_page(page))
}
