//! HTML tokenizer for the Scour sanitizer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - a single-pass, lazy scanner that turns untrusted markup
//!   into a stream of structural tokens (start tag, end tag, text, comment),
//!   auto-closing unbalanced elements via an open-element stack
//! - **Attribute Lexer** - a linear-time scanner for the interior of a start
//!   tag, producing ordered name/optional-value pairs
//! - **Void element classifier** - the fixed set of elements that never take
//!   children or a closing tag
//!
//! # Deliberately Not Implemented
//!
//! - Tree construction (no DOM, no insertion modes, no adoption agency)
//! - Namespace-aware foreign content (SVG, `MathML`)
//! - Standards-faithful error recovery - the tokenizer only promises to be
//!   *safe* under malformed input, never to reproduce browser parse trees
//!
//! The design constraint that shapes everything here is the progress
//! guarantee: each tokenizer iteration strictly shrinks the unconsumed input,
//! so adversarial markup can never push parsing past O(n) character
//! inspections.

/// Tokenizer, attribute lexer, and token types.
pub mod tokenizer;

pub use tokenizer::{Attribute, Token, Tokenizer, is_void_element, lex_attributes};
