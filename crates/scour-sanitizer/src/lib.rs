//! Whitelist HTML sanitizer for the Scour project.
//!
//! # Scope
//!
//! This crate provides:
//! - **Policy** - resolved whitelist configuration (tags, attributes,
//!   classes, URL schemes, optional hooks), with defaults and a JSON file
//!   form
//! - **Whitelist Filter** - the token-by-token decision engine with
//!   suppression tracking for rejected subtrees
//! - **Engine seam** - optional delegation to a host-provided sanitizer
//!   with unconditional fallback to the core
//!
//! # Threat model
//!
//! Input is assumed hostile. Nothing in the pipeline errors on malformed
//! markup; every degenerate case degrades to dropping the offending
//! fragment. The only failures that can escape a sanitize call come from
//! caller-supplied hooks (accept predicate, text transform), which the core
//! deliberately does not catch.
//!
//! ```
//! use scour_sanitizer::sanitize;
//!
//! let clean = sanitize("<script>alert(1)</script><p>Hello</p>");
//! assert_eq!(clean, "<p>Hello</p>");
//! ```

pub mod engine;
pub mod filter;
pub mod policy;
pub mod url;

pub use scour_html as html;

pub use engine::{EngineError, Sanitizer, SanitizerEngine};
pub use filter::{FilterState, WhitelistFilter};
pub use policy::{Policy, PolicyError, PolicyFile, WILDCARD};

use scour_html::Tokenizer;

/// Sanitize `html` under the default policy.
#[must_use]
pub fn sanitize(html: &str) -> String {
    sanitize_with(html, &Policy::default())
}

/// Sanitize `html` under `policy`.
///
/// One pass: the tokenizer consumes the input exactly once and the filter
/// decides token by token, so the call is O(n) in the input length with no
/// shared state - concurrent calls on independent threads are safe.
#[must_use]
pub fn sanitize_with(html: &str, policy: &Policy) -> String {
    WhitelistFilter::run(policy, Tokenizer::new(html))
}
