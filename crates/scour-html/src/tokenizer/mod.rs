//! HTML tokenizer module.
//!
//! A deliberately small grammar: comments, end tags, start tags, text. Four
//! rules tried in order against the unconsumed input, each consuming at least
//! one byte. Anything that matches no rule is discarded, which is what bounds
//! worst-case work on hostile input.

/// Attribute lexer for start-tag interiors.
pub mod attrs;
/// Tokenizer main loop and open-element stack.
pub mod core;
/// Void element classifier.
pub mod elements;
/// Token types produced by the tokenizer.
pub mod token;

pub use attrs::lex_attributes;
pub use self::core::Tokenizer;
pub use elements::is_void_element;
pub use token::{Attribute, Token};
