//! Engine warnings with colored terminal output.
//!
//! Each distinct message is printed once per process (or until
//! [`clear_warnings`] is called), so a stylesheet that repeats the same
//! unsupported shorthand a thousand times produces one line.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a declaration the engine could not handle (prints once per unique message).
///
/// Returns `true` if the message was printed, `false` if it was a duplicate.
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unknown shorthand 'grid-area'");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[Longhand {component}] ⚠ {message}{RESET}");
    }
    should_print
}

/// Forget every recorded warning (call between independent inputs).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
