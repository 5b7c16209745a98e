//! Parse-anomaly warnings with colored terminal output.
//!
//! Hostile input produces the same malformed construct thousands of times, so
//! warnings are deduplicated: each unique message prints once per process (or
//! until [`clear_warnings`] is called between documents).

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable parse anomaly (prints once per unique message).
///
/// Anomalies are never fatal: the tokenizer degrades gracefully and keeps
/// going, so this is purely diagnostic.
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "unterminated comment at position 42");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[Scour {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call between independent documents)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
