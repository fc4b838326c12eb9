//! Structured logging for offsetpreload host-side tooling.
//!
//! The shim itself never goes through `tracing` — inside an LD_PRELOAD
//! library a subscriber cannot be trusted to exist, and its hot paths must
//! not allocate. The macros here back this crate's own resolution logging,
//! and `init_logging` serves whatever launch tooling sets up the
//! environment and loads the shim (the crate's integration tests use it
//! the same way).

/// Log levels for runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[macro_export]
macro_rules! log_config_debug {
    ($msg:literal $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::debug!(component = "CONFIG", $($key = $value,)* $msg)
    };
}

#[macro_export]
macro_rules! log_config_warn {
    ($msg:literal $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::warn!(component = "CONFIG", $($key = $value,)* $msg)
    };
}

/// Initialize logging with the given level filter.
/// Call this once at application startup.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
