//! The whitelist filter: token stream in, sanitized markup out.
//!
//! Two states. `Passing` emits whatever the policy admits; `Suppressing`
//! discards everything until the rejected element's subtree is closed, with
//! a depth counter so nested same-named tags (`<script><script>`) cannot end
//! suppression early. Comments are dropped unconditionally in either state.

use strum_macros::Display;

use scour_common::entities;
use scour_html::{Attribute, Token};

use crate::policy::Policy;
use crate::url::{is_url_attribute, scheme_permitted};

/// Filter state. `depth` counts how many nested start tags named `tag` are
/// still open inside the suppressed subtree (`> 0` by construction).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FilterState {
    /// Tokens are evaluated against the policy and emitted when allowed.
    Passing,
    /// Everything is discarded until the rejected element closes.
    Suppressing {
        /// Lowercased name of the rejected element.
        tag: String,
        /// Nesting depth of same-named start tags seen since rejection.
        depth: usize,
    },
}

/// Consumes a token stream and accumulates the sanitized output.
///
/// Owns the suppression state for exactly one sanitize call; construct a
/// fresh filter per input. Stream exhaustion while suppressing simply ends
/// the output - a suppressed subtree never needs a closing tag emitted.
pub struct WhitelistFilter<'p> {
    policy: &'p Policy,
    state: FilterState,
    out: String,
}

impl<'p> WhitelistFilter<'p> {
    /// Create a filter over `policy`.
    #[must_use]
    pub const fn new(policy: &'p Policy) -> Self {
        Self {
            policy,
            state: FilterState::Passing,
            out: String::new(),
        }
    }

    /// Current filter state.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Drain `tokens` through the filter and return the sanitized output.
    #[must_use]
    pub fn run(policy: &Policy, tokens: impl Iterator<Item = Token>) -> String {
        let mut filter = WhitelistFilter::new(policy);
        for token in tokens {
            filter.feed(token);
        }
        filter.finish()
    }

    /// Process one token.
    pub fn feed(&mut self, token: Token) {
        match token {
            Token::StartTag {
                name,
                self_closing,
                attributes,
            } => self.handle_start_tag(&name, self_closing, &attributes),
            Token::EndTag { name } => self.handle_end_tag(&name),
            Token::Text { data } => self.handle_text(&data),
            // Comments are stripped unconditionally.
            Token::Comment { .. } => {}
        }
    }

    /// Consume the filter and return the accumulated output.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn handle_start_tag(&mut self, name: &str, self_closing: bool, attributes: &[Attribute]) {
        if let FilterState::Suppressing { tag, depth } = &mut self.state {
            // A nested same-named tag deepens the suppressed subtree, but
            // only if it will produce a matching end tag.
            if tag.as_str() == name && !self_closing {
                *depth += 1;
            }
            return;
        }

        if !self.policy.allows_tag(name) || !self.policy.accepts(name, attributes) {
            // Rejected. A self-closing tag has no subtree to suppress; a
            // normal one swallows everything until its close.
            if !self_closing {
                self.state = FilterState::Suppressing {
                    tag: name.to_owned(),
                    depth: 1,
                };
            }
            return;
        }

        self.out.push('<');
        self.out.push_str(name);
        for attribute in attributes {
            self.emit_attribute(name, attribute);
        }
        self.out.push_str(if self_closing { "/>" } else { ">" });
    }

    fn handle_end_tag(&mut self, name: &str) {
        match &mut self.state {
            FilterState::Suppressing { tag, depth } => {
                if tag.as_str() == name {
                    *depth -= 1;
                    if *depth == 0 {
                        self.state = FilterState::Passing;
                    }
                }
            }
            FilterState::Passing => {
                if self.policy.allows_tag(name) {
                    self.out.push_str("</");
                    self.out.push_str(name);
                    self.out.push('>');
                }
            }
        }
    }

    fn handle_text(&mut self, data: &str) {
        if self.state == FilterState::Passing {
            self.out.push_str(&self.policy.transform_text(data));
        }
    }

    /// Attribute decision for one attribute on an accepted tag.
    fn emit_attribute(&mut self, tag: &str, attribute: &Attribute) {
        let lower = attribute.name.to_ascii_lowercase();
        let plainly_allowed = self.policy.allows_attribute(tag, &lower);

        // A `class` attribute that is not whitelisted as a plain attribute
        // still survives partially: keep exactly the class names the policy
        // lists for this tag.
        if lower == "class" && !plainly_allowed {
            let Some(allowed) = self.policy.allowed_classes(tag) else {
                return;
            };
            let value = attribute.value.as_deref().unwrap_or_default();
            let kept: Vec<&str> = value
                .split(' ')
                .filter(|class| allowed.contains(*class))
                .collect();
            if !kept.is_empty() {
                self.push_attribute("class", Some(&kept.join(" ")));
            }
            return;
        }

        if !plainly_allowed {
            return;
        }
        if is_url_attribute(&lower)
            && let Some(value) = &attribute.value
            && !scheme_permitted(value, self.policy)
        {
            return;
        }
        self.push_attribute(&attribute.name, attribute.value.as_deref());
    }

    /// Serialize ` name="encoded-value"`, or bare ` name` for a boolean
    /// attribute.
    fn push_attribute(&mut self, name: &str, value: Option<&str>) {
        self.out.push(' ');
        self.out.push_str(name);
        if let Some(value) = value {
            self.out.push_str("=\"");
            self.out.push_str(&entities::encode(value));
            self.out.push('"');
        }
    }
}
