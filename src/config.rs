/// Application-level constants
pub const APP_NAME: &str = "Medlist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable read by the tracing subscriber.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Log filter used when `RUST_LOG` is unset or unparsable.
pub fn default_log_filter() -> &'static str {
    "medlist=info,medlist_lib=info"
}
