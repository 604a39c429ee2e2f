//! Tracing subscriber setup shared by the desktop binary and tools.

use tracing_subscriber::EnvFilter;

/// Directives used when neither `RUST_LOG` nor an explicit filter is set.
pub const DEFAULT_FILTER: &str = "bentobio=info,bentobio_core=info,bentobio_ui=info";

/// Pick the filter: explicit argument, then `RUST_LOG`, then the default.
pub fn resolve_filter(explicit: Option<&str>) -> EnvFilter {
    if let Some(directives) = explicit {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid log filter '{directives}': {e}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a formatted subscriber writing to stderr. Safe to call more
/// than once; later calls are no-ops.
pub fn init(explicit: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(explicit))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let filter = resolve_filter(Some("bentobio_core=trace"));
        assert_eq!(filter.to_string(), "bentobio_core=trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Some("warn"));
        init(Some("debug"));
    }
}
