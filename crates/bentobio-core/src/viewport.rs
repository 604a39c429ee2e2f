//! One-shot entrance trigger.
//!
//! A card observes its own visibility once. The first intersecting report
//! reveals it and the observation is released immediately, so later
//! enter/leave cycles can never replay the entrance. A card that unmounts
//! unseen releases its observation with [`release_script`].
//!
//! Observers are kept in a page-global registry keyed by element id so the
//! release script can find them.

use serde::{Deserialize, Serialize};

/// Visibility observation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportOptions {
    /// Root margin in CSS pixels. Negative shrinks the viewport so the
    /// trigger fires once the card is slightly inside it.
    pub margin_px: i32,
    /// Fraction of the element that must be visible, 0.0..=1.0
    pub threshold: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            margin_px: -50,
            threshold: 0.0,
        }
    }
}

impl ViewportOptions {
    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin_px)
    }

    /// JavaScript that watches `element_id` and sends `true` back to the
    /// host exactly once, disconnecting its observer in the same callback.
    ///
    /// A previous observer registered for the same id is released first.
    /// Resolves with nothing if the element is gone before it is seen.
    pub fn observer_script(&self, element_id: &str) -> String {
        let id = js_string(element_id);
        format!(
            r#"
{registry}
{release}
const el = document.getElementById({id});
if (el) {{
  const observer = new IntersectionObserver((entries) => {{
    for (const entry of entries) {{
      if (entry.isIntersecting) {{
        observer.disconnect();
        window.{REGISTRY}.delete({id});
        dioxus.send(true);
        return;
      }}
    }}
  }}, {{ rootMargin: "{margin}", threshold: {threshold} }});
  window.{REGISTRY}.set({id}, observer);
  observer.observe(el);
}}
"#,
            registry = registry_init(),
            release = release_script(element_id),
            margin = self.root_margin(),
            threshold = self.threshold.clamp(0.0, 1.0),
        )
    }
}

/// Global holding live observers by element id.
const REGISTRY: &str = "__bentoObservers";

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn registry_init() -> String {
    format!("window.{REGISTRY} = window.{REGISTRY} || new Map();")
}

/// JavaScript that disconnects and forgets the observer for `element_id`,
/// if one is still registered. Safe to run any number of times.
pub fn release_script(element_id: &str) -> String {
    let id = js_string(element_id);
    format!(
        r#"{{
  const observer = window.{REGISTRY} && window.{REGISTRY}.get({id});
  if (observer) {{
    observer.disconnect();
    window.{REGISTRY}.delete({id});
  }}
}}"#
    )
}
