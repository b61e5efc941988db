//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the admin server and tower-http log at info.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "admin_server=info,tower_http=info";

/// Initialize the global subscriber
///
/// `json` switches to one JSON object per line for log shippers.
pub fn init_logger(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    // try_init: tests may install a subscriber first
    let result = if json {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
