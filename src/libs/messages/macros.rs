//! Convenient macros for application messaging and logging.
//!
//! Every macro routes its output depending on the run mode:
//!
//! - **Normal mode**: plain `println!` / `eprintln!` console output
//! - **Debug mode**: structured `tracing` events, enabled when either
//!   `TIMER_DEBUG` or `RUST_LOG` is set
//!
//! ```rust
//! use timer::{msg_debug, msg_success};
//! use timer::libs::messages::Message;
//!
//! msg_success!(Message::SessionStarted("write-report".to_string()));
//! msg_debug!("matched {} document(s)", 2);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled. The environment is read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TIMER_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️  {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix. Suppressed entirely in normal mode.
///
/// Accepts either a single displayable expression or `format!`-style arguments.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::debug!("🔍 {}", $msg);
        }
    };
    ($fmt:expr, $($arg:tt)+) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            $crate::tracing::debug!("🔍 {}", format!($fmt, $($arg)+));
        }
    };
}
