//! Tokenizer main loop.
//!
//! Four rules, tried in order against the unconsumed input: comment, end
//! tag, start tag, text. Every iteration either consumes at least one byte
//! or discards the remainder, which bounds tokenization at O(n) character
//! inspections no matter how hostile the input is. There is no lookahead
//! past the current construct and no backtracking.

use std::collections::VecDeque;

use scour_common::warning::warn_once;

use super::attrs::{is_whitespace, lex_attributes};
use super::elements::is_void_element;
use super::token::Token;

/// Characters permitted in a tag name after the leading letter.
///
/// Shared by start and end tags so that `<my-tag>` and `</my-tag>` agree on
/// the name and the open-element stack can match them up.
const fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '-')
}

/// A lazy, finite, forward-only token stream over one input string.
///
/// The tokenizer owns the open-element stack for the duration of the parse:
/// non-void start tags push their lowercased name, end tags pop to the
/// nearest-enclosing match (closing intervening elements implicitly), and
/// anything still open when input runs out is closed synthetically, as if
/// the input had the missing end tags appended.
///
/// The stream is not restartable; tokenizing again means constructing a
/// fresh `Tokenizer`.
pub struct Tokenizer {
    /// The full input; `pos` marks the start of the unconsumed suffix.
    input: String,
    /// Byte offset of the unconsumed input. Strictly increases per step.
    pos: usize,
    /// Lowercased names of currently-open, non-void elements. Index 0 is
    /// the outermost.
    open_elements: Vec<String>,
    /// Tokens scanned but not yet yielded. An end tag that closes several
    /// still-open elements produces a burst of `EndTag`s through here.
    pending: VecDeque<Token>,
    /// Scan iterations performed so far. Exposed so tests can assert the
    /// termination bound instead of trusting wall-clock time.
    steps: usize,
}

impl Tokenizer {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            pos: 0,
            open_elements: Vec::new(),
            pending: VecDeque::new(),
            steps: 0,
        }
    }

    /// Byte offset of the unconsumed input. Monotonically non-decreasing
    /// across calls to [`Iterator::next`].
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Number of scan iterations performed so far. Bounded by the input
    /// length in bytes.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Run one scan iteration: dispatch on the structural prefix of the
    /// unconsumed input and queue whatever tokens it produces.
    fn scan_once(&mut self) {
        if self.remaining().starts_with("<!--") {
            self.scan_comment();
        } else if self.remaining().starts_with("</") {
            if !self.scan_end_tag() {
                self.scan_text();
            }
        } else if self.remaining().starts_with('<') {
            if !self.scan_start_tag() {
                self.scan_text();
            }
        } else {
            self.scan_text();
        }
    }

    /// Rule 1: `<!--` ... `-->`.
    ///
    /// A comment with no closer is unrecoverable trailing noise: everything
    /// after the opener is discarded so a truncated `<!--` can never hide
    /// markup from the filter.
    fn scan_comment(&mut self) {
        let remaining = self.remaining();
        if let Some(end) = remaining[4..].find("-->") {
            let data = remaining[4..4 + end].to_string();
            self.pos += 4 + end + 3;
            self.pending.push_back(Token::Comment { data });
        } else {
            warn_once(
                "Tokenizer",
                &format!("unterminated comment at position {}", self.pos),
            );
            self.pos = self.input.len();
        }
    }

    /// Rule 2: `</name ... >`.
    ///
    /// Pops the open-element stack down to and including the
    /// nearest-enclosing element with this name (case-insensitive),
    /// emitting an `EndTag` for each element closed on the way. An end tag
    /// with no matching open element is consumed and dropped. Returns false
    /// when the construct does not parse as an end tag at all.
    fn scan_end_tag(&mut self) -> bool {
        let remaining = self.remaining();
        let body = remaining[2..].trim_start_matches(is_whitespace);

        let name_len = body.find(|c: char| !is_tag_name_char(c)).unwrap_or(body.len());
        if name_len == 0 {
            return false;
        }
        let Some(gt) = remaining.find('>') else {
            return false;
        };

        let name = body[..name_len].to_ascii_lowercase();
        if let Some(depth) = self.open_elements.iter().rposition(|open| *open == name) {
            let mut closed = self.open_elements.split_off(depth);
            while let Some(tag) = closed.pop() {
                self.pending.push_back(Token::EndTag { name: tag });
            }
        }
        self.pos += gt + 1;
        true
    }

    /// Rule 3: `<name ... >`.
    ///
    /// The tag name is the leading letter-initiated name run; the interior
    /// up to `>` goes to the attribute lexer. A tag written with a trailing
    /// `/`, or whose name is a void element, is self-closing and never
    /// touches the open-element stack. When no `>` exists in the rest of
    /// the input, the remainder is plain text: an open tag without a close
    /// is never tokenized. Returns false when the name is invalid.
    fn scan_start_tag(&mut self) -> bool {
        let remaining = self.remaining();
        let Some(gt) = remaining.find('>') else {
            let data = remaining.to_string();
            self.pos = self.input.len();
            self.pending.push_back(Token::Text { data });
            return true;
        };

        let interior = &remaining[1..gt];
        if !interior.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return false;
        }
        let name_len = interior
            .find(|c: char| !is_tag_name_char(c))
            .unwrap_or(interior.len());
        let name = interior[..name_len].to_ascii_lowercase();

        let mut tail = interior[name_len..].trim_end_matches(is_whitespace);
        let written_self_closing = tail.ends_with('/');
        if written_self_closing {
            tail = &tail[..tail.len() - 1];
        }

        let attributes = lex_attributes(tail);
        let self_closing = written_self_closing || is_void_element(&name);
        if !self_closing {
            self.open_elements.push(name.clone());
        }

        self.pos += gt + 1;
        self.pending.push_back(Token::StartTag {
            name,
            self_closing,
            attributes,
        });
        true
    }

    /// Rule 4: plain text up to the next `<` (or end of input).
    ///
    /// Reached when the input neither starts with a structural construct
    /// nor parses as one. A leading `<` here means nothing matched and no
    /// progress is possible; the remainder is discarded to guarantee
    /// termination.
    fn scan_text(&mut self) {
        let remaining = self.remaining();
        match remaining.find('<') {
            Some(0) => {
                warn_once(
                    "Tokenizer",
                    &format!("unparseable markup at position {}; discarding remainder", self.pos),
                );
                self.pos = self.input.len();
            }
            Some(index) => {
                let data = remaining[..index].to_string();
                self.pos += index;
                self.pending.push_back(Token::Text { data });
            }
            None => {
                let data = remaining.to_string();
                self.pos = self.input.len();
                self.pending.push_back(Token::Text { data });
            }
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.input.len() {
                // Synthetic closes for whatever malformed input left open,
                // innermost first.
                return self.open_elements.pop().map(|name| Token::EndTag { name });
            }

            self.steps += 1;
            let before = self.pos;
            self.scan_once();

            // scan_once always progresses or queues a token; this is the
            // hard backstop that makes that an invariant rather than a hope.
            if self.pos == before && self.pending.is_empty() {
                self.pos = self.input.len();
            }
        }
    }
}

impl std::iter::FusedIterator for Tokenizer {}
