//! Logging macros
//!
//! Router internals log through these macros so the backend can be picked at
//! compile time:
//!
//! - `log` (default) - forwards to the `log` crate
//! - `tracing` - forwards to the `tracing` crate
//!
//! The two features are mutually exclusive. With neither enabled the macros
//! expand to nothing. Every record uses the `gpui_waypoint` target so it can be
//! filtered with e.g. `RUST_LOG=gpui_waypoint=debug`.
//!
//! ```ignore
//! use gpui_waypoint::{debug_log, warn_log};
//!
//! debug_log!("resolved '{}' to '{}'", path, pattern);
//! warn_log!("route '{}' is unreachable", pattern);
//! ```

/// Trace-level record (per-render details).
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "gpui_waypoint", $($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!(target: "gpui_waypoint", $($arg)*);
    };
}

/// Debug-level record (navigation, mounting).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "gpui_waypoint", $($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!(target: "gpui_waypoint", $($arg)*);
    };
}

/// Info-level record.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!(target: "gpui_waypoint", $($arg)*);
        #[cfg(feature = "log")]
        ::log::info!(target: "gpui_waypoint", $($arg)*);
    };
}

/// Warn-level record (suspicious configuration, unknown route names).
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(target: "gpui_waypoint", $($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!(target: "gpui_waypoint", $($arg)*);
    };
}

/// Error-level record.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!(target: "gpui_waypoint", $($arg)*);
        #[cfg(feature = "log")]
        ::log::error!(target: "gpui_waypoint", $($arg)*);
    };
}
