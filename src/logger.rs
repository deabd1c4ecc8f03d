//! Logging utilities with colored module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("bundle"; "rendered {} bundles", count);
//! debug!("bundle"; "cache hit for `{}`", key);
//! ```

use owo_colors::OwoColorize;
use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when verbose mode is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{:>10} {}", module.cyan().bold(), message).ok();
}
