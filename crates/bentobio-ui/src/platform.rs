//! Bridge to the webview: visibility observation and opening URLs.
//!
//! Both go through `document::eval`, so they must run inside the Dioxus
//! runtime (a component, or a task spawned from one).

use bentobio_core::viewport::release_script;
use bentobio_core::{LinkTarget, Navigator, ViewportOptions};
use dioxus::document;

/// Opens destinations with `window.open` in the host webview.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalNavigator;

impl Navigator for EvalNavigator {
    fn open(&self, url: &str, target: LinkTarget) {
        // Malformed URLs fail inside the webview; nothing to report here.
        let _ = document::eval(&open_script(url, target));
    }
}

/// `window.open(url, target)` with both arguments as JSON string literals.
pub fn open_script(url: &str, target: LinkTarget) -> String {
    let url = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    let target = serde_json::to_string(target.as_dom_target()).unwrap_or_else(|_| "\"_blank\"".to_string());
    format!("window.open({url}, {target});")
}

/// Wait for `element_id` to scroll into view.
///
/// Resolves `true` once on the first intersection. Resolves `false` if the
/// observation ends without one (the element vanished or the channel
/// closed); the card then simply stays hidden.
pub async fn observe_entrance(options: ViewportOptions, element_id: String) -> bool {
    let mut eval = document::eval(&options.observer_script(&element_id));
    match eval.recv::<bool>().await {
        Ok(visible) => visible,
        Err(e) => {
            tracing::debug!(%element_id, error = ?e, "Visibility observation ended");
            false
        }
    }
}

/// Disconnect the observer for `element_id` if it is still waiting.
///
/// Called when a card unmounts; a card that was already seen has nothing
/// left to release.
pub fn release_entrance(element_id: &str) {
    let _ = document::eval(&release_script(element_id));
}
