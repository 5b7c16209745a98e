//! Common utilities for the Scour sanitizer.
//!
//! This crate provides shared infrastructure used by the tokenizer and the
//! whitelist filter:
//! - **Entity Codec** - character reference decoding and output escaping
//! - **Warning System** - colored terminal output for parse anomalies

pub mod entities;
pub mod warning;
