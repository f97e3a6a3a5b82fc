#![warn(clippy::all, rust_2018_idioms)]

/// Logging macros that stamp every record with `[file:module:line]`.
///
/// Each record goes to both `log` and `tracing` so that embedders which only
/// install a `log` backend still see filter-store diagnostics.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        log::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        log::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        log::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), message);
    }};
}
