use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log output format
pub const LOG_FORMAT_VAR: &str = "TEDDY_LOG_FORMAT";

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - `TEDDY_LOG_FORMAT=json` switches to flattened JSON lines, anything
///   else keeps the human-readable format
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_VAR)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}
