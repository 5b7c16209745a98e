//! Character reference codec for attribute values and serialized output.
//!
//! The sanitizer decodes entities when extracting attribute values (so the
//! scheme check sees `javascript:` even when the colon arrives as `&#58;`)
//! and re-encodes on the way out. Only the references that matter for markup
//! safety are handled; everything else passes through untouched.
//!
//! Guarantee relied on by the filter: `decode(encode(x))` and
//! `encode(decode(x))` round-trip for `< > & " '`.

/// Named references resolved by [`decode`].
///
/// Deliberately tiny: the five markup-significant characters plus the two
/// names that show up constantly in real-world attribute values.
const NAMED: [(&str, char); 6] = [
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{A0}'),
];

/// Longest named reference we will attempt to match, in characters.
const MAX_NAME_LEN: usize = 8;

/// Escape a string for emission into markup output.
///
/// Escapes `&`, `<`, `>`, `"`, and `'` so the result is safe in both text
/// and double-quoted attribute contexts.
#[must_use]
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Resolve character references in a string.
///
/// Handles the named references in [`NAMED`] and numeric references in
/// decimal (`&#60;`) and hexadecimal (`&#x3C;`) form. Malformed input
/// degrades instead of failing:
/// - an out-of-range or surrogate code point becomes U+FFFD
/// - an oversized digit run becomes U+FFFD
/// - an unterminated or unknown reference passes through literally
#[must_use]
pub fn decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        if let Some((decoded, consumed)) = decode_reference(tail) {
            out.push(decoded);
            rest = &tail[consumed..];
        } else {
            out.push('&');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Try to decode one reference at the start of `tail` (which begins with
/// `&`). Returns the decoded character and the number of bytes consumed,
/// or `None` when the text after the ampersand is not a reference we
/// recognize.
fn decode_reference(tail: &str) -> Option<(char, usize)> {
    let body = &tail[1..];

    if let Some(numeric) = body.strip_prefix('#') {
        return decode_numeric(numeric).map(|(c, n)| (c, n + 2));
    }

    // Named reference: an alphanumeric run terminated by a semicolon.
    let name_len = body
        .char_indices()
        .take(MAX_NAME_LEN)
        .take_while(|(_, c)| c.is_ascii_alphanumeric())
        .last()
        .map(|(i, c)| i + c.len_utf8())?;

    if !body[name_len..].starts_with(';') {
        return None;
    }

    let name = &body[..name_len];
    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, c)| (c, 1 + name_len + 1))
}

/// Decode the digits of a numeric reference (the part after `&#`).
/// Returns the character and the bytes consumed including the semicolon.
fn decode_numeric(body: &str) -> Option<(char, usize)> {
    let (radix, digits_start) = if body.starts_with(['x', 'X']) {
        (16, 1)
    } else {
        (10, 0)
    };

    let digits = &body[digits_start..];
    let digit_len = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());

    if digit_len == 0 || !digits[digit_len..].starts_with(';') {
        return None;
    }

    // Overflowing u32 (oversized escape) and invalid code points both
    // degrade to the replacement character rather than erroring out.
    let c = u32::from_str_radix(&digits[..digit_len], radix)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('\u{FFFD}');

    Some((c, digits_start + digit_len + 1))
}
