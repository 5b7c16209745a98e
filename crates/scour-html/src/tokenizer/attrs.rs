//! Attribute lexer for start-tag interiors.
//!
//! Given the raw substring between a tag name and the closing `>`, produce
//! the ordered attribute list. One forward cursor, no backtracking: hostile
//! input can make the result partial or empty but can never make this scan
//! more than once over any byte.

use scour_common::entities;

use super::token::Attribute;

/// ASCII whitespace as it appears between attributes.
///
/// Unlike the HTML tokenizer's set this includes CR, because input reaches
/// us unnormalized.
pub(super) const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Characters permitted in an attribute name.
const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '-' | '_')
}

fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_whitespace)
}

/// Lex the interior of a start tag into an ordered attribute list.
///
/// Per attribute: skip whitespace, consume a maximal name run, then either
/// read an `=`-introduced value (quoted or unquoted, entity-decoded) or
/// record a boolean attribute. A zero-length name run means stray
/// punctuation; the cursor advances one character and scanning resumes, so
/// garbage between attributes is skipped rather than looped on.
///
/// Never fails: truncated or garbled input degrades to partial extraction.
#[must_use]
pub fn lex_attributes(raw: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut rest = raw;

    loop {
        rest = skip_whitespace(rest);
        if rest.is_empty() {
            break;
        }

        let name_len = rest.find(|c| !is_name_char(c)).unwrap_or(rest.len());
        if name_len == 0 {
            // Stray punctuation. Step over it instead of spinning.
            let step = rest.chars().next().map_or(0, char::len_utf8);
            rest = &rest[step..];
            continue;
        }

        let name = &rest[..name_len];
        rest = skip_whitespace(&rest[name_len..]);

        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = skip_whitespace(after_eq);
            if after_eq.is_empty() {
                // A dangling `=` at the end of the tag: empty value, and
                // there is nothing left to scan.
                attributes.push(Attribute::new(name.to_string(), String::new()));
                break;
            }
            let (value, remainder) = read_value(after_eq);
            attributes.push(Attribute::new(name.to_string(), entities::decode(value)));
            rest = remainder;
        } else {
            attributes.push(Attribute::boolean(name.to_string()));
        }
    }

    attributes
}

/// Read one attribute value starting at `input` (non-empty, whitespace
/// already skipped). Returns the raw value slice and the remainder.
///
/// Quoted values run to the matching quote or end of input; unquoted values
/// run to whitespace, `>`, or end of input.
fn read_value(input: &str) -> (&str, &str) {
    let mut chars = input.chars();
    match chars.next() {
        Some(quote @ ('"' | '\'')) => {
            let body = chars.as_str();
            body.find(quote).map_or(
                // Unterminated quote: the value is everything that is left.
                (body, ""),
                |end| (&body[..end], &body[end + quote.len_utf8()..]),
            )
        }
        _ => {
            let end = input
                .find(|c: char| is_whitespace(c) || c == '>')
                .unwrap_or(input.len());
            (&input[..end], &input[end..])
        }
    }
}
