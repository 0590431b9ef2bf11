//! Messaging macros.
//!
//! `msg_print!` writes plain CLI output to stdout. Every other macro routes a
//! [`Message`](super::Message) (or any `Display` value) into `tracing` at the
//! matching level, prefixed the same way in every log line:
//!
//! - **`msg_success!`**: ✅, `info` level
//! - **`msg_info!`**: ℹ️, `info` level
//! - **`msg_warning!`**: ⚠️, `warn` level
//! - **`msg_error!`**: ❌, `error` level
//! - **`msg_debug!`**: 🔍, `debug` level
//!
//! ```rust,no_run
//! use todolist::libs::messages::Message;
//! use todolist::{msg_info, msg_print};
//!
//! msg_info!(Message::DatabaseUpToDate);
//! msg_print!(Message::DatabaseVersion(2));
//! ```

/// Prints a message to stdout.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg);
    };
}

/// Logs a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        tracing::info!("✅ {}", $msg);
    };
}

/// Logs an error message with ❌ prefix.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        tracing::error!("❌ {}", $msg);
    };
}

/// Logs a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        tracing::warn!("⚠️ {}", $msg);
    };
}

/// Logs an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("ℹ️ {}", $msg);
    };
}

/// Logs a debug message with 🔍 prefix. Hidden unless the filter enables
/// `debug` for the calling module.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("🔍 {}", $msg);
    };
}
