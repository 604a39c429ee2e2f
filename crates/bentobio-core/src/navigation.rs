//! Deferred outbound navigation.
//!
//! Activating a card never navigates synchronously. The press animation is
//! given a fixed delay to play out, then the destination opens in a new
//! browsing context. The delay always elapses; nothing cancels it.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where a destination opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// `window.open(url, "_blank")`
    #[default]
    NewContext,
    /// Replace the current page
    SameContext,
}

impl LinkTarget {
    /// Value for the DOM `target` argument.
    pub fn as_dom_target(self) -> &'static str {
        match self {
            LinkTarget::NewContext => "_blank",
            LinkTarget::SameContext => "_self",
        }
    }
}

/// What a second activation does while the first is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    /// Every activation schedules its own navigation (double tap, two tabs).
    #[default]
    Independent,
    /// Activations are dropped while one is pending for the same card.
    Debounce,
}

/// Navigation timing and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationPolicy {
    pub delay_ms: u64,
    pub target: LinkTarget,
    pub repeat: RepeatPolicy,
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self {
            delay_ms: 200,
            target: LinkTarget::NewContext,
            repeat: RepeatPolicy::Independent,
        }
    }
}

impl NavigationPolicy {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Platform boundary that actually opens a URL.
///
/// Implementations do not validate the URL; a malformed one fails however
/// the platform fails.
pub trait Navigator {
    fn open(&self, url: &str, target: LinkTarget);
}

/// Decrements the pending count when a navigation finishes or is dropped.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Turns activations into delayed navigations for one card.
///
/// [`activate`](Self::activate) returns a future rather than spawning it,
/// so the caller picks the executor.
pub struct DeferredNavigator<N> {
    navigator: Arc<N>,
    policy: NavigationPolicy,
    pending: Arc<AtomicUsize>,
}

impl<N> Clone for DeferredNavigator<N> {
    fn clone(&self) -> Self {
        Self {
            navigator: Arc::clone(&self.navigator),
            policy: self.policy,
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<N: Navigator + 'static> DeferredNavigator<N> {
    pub fn new(navigator: Arc<N>, policy: NavigationPolicy) -> Self {
        Self {
            navigator,
            policy,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    /// Number of navigations still waiting out their delay.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Schedule navigation to `url`.
    ///
    /// Returns `None` only when debouncing and a navigation is already
    /// pending. The returned future opens `url` exactly once, no sooner
    /// than the configured delay after it is first polled.
    pub fn activate(&self, url: impl Into<String>) -> Option<impl Future<Output = ()> + 'static> {
        let url = url.into();
        match self.policy.repeat {
            RepeatPolicy::Independent => {
                self.pending.fetch_add(1, Ordering::SeqCst);
            }
            RepeatPolicy::Debounce => {
                if self
                    .pending
                    .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
                    .is_err()
                {
                    tracing::debug!(%url, "Activation dropped, navigation already pending");
                    return None;
                }
            }
        }

        let navigator = Arc::clone(&self.navigator);
        let guard = PendingGuard(Arc::clone(&self.pending));
        let delay = self.policy.delay();
        let target = self.policy.target;

        Some(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(%url, target = target.as_dom_target(), "Opening destination");
            navigator.open(&url, target);
            drop(guard);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_opens_new_context_after_200ms() {
        let policy = NavigationPolicy::default();
        assert_eq!(policy.delay(), Duration::from_millis(200));
        assert_eq!(policy.target.as_dom_target(), "_blank");
        assert_eq!(policy.repeat, RepeatPolicy::Independent);
    }

    #[test]
    fn policy_from_json() {
        let policy: NavigationPolicy =
            serde_json::from_str(r#"{ "repeat": "debounce", "target": "same_context" }"#).unwrap();
        assert_eq!(policy.delay_ms, 200);
        assert_eq!(policy.repeat, RepeatPolicy::Debounce);
        assert_eq!(policy.target, LinkTarget::SameContext);
    }
}
