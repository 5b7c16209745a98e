//! Whitelist policy resolution.
//!
//! A [`Policy`] is the immutable, fully-populated rule set governing one
//! sanitize call: allowed tags, per-tag (and wildcard) attributes, per-tag
//! classes, URL schemes, and the two optional hooks. The core never mutates
//! it; resolution from partial user input happens here, at the boundary,
//! either through the builder methods or from a serde-backed [`PolicyFile`].

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use scour_html::Attribute;

/// The wildcard tag: attributes allowed on every element.
pub const WILDCARD: &str = "*";

/// Tags permitted when no policy is supplied.
const DEFAULT_TAGS: [&str; 42] = [
    "a", "article", "b", "blockquote", "br", "caption", "code", "del", "details", "div", "em",
    "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img", "ins", "li", "main", "mark", "ol", "p",
    "pre", "section", "span", "strike", "strong", "sub", "summary", "sup", "table", "tbody", "td",
    "th", "thead", "tr", "u", "ul",
];

/// Per-tag attributes permitted when no policy is supplied.
///
/// `iframe` appears here but not in [`DEFAULT_TAGS`]: the rules only take
/// effect if a caller explicitly allows the tag.
const DEFAULT_ATTRIBUTES: [(&str, &[&str]); 3] = [
    ("a", &["href", "name", "target"]),
    ("iframe", &["allowfullscreen", "frameborder", "src"]),
    ("img", &["src"]),
];

/// URL schemes permitted when no policy is supplied.
const DEFAULT_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Caller-supplied accept predicate: tag name plus lexed attributes in,
/// keep-or-suppress out.
pub type AcceptPredicate = dyn Fn(&str, &[Attribute]) -> bool + Send + Sync;

/// Caller-supplied transform applied to every emitted text run.
pub type TextTransform = dyn Fn(&str) -> String + Send + Sync;

/// An immutable, fully-resolved whitelist policy.
pub struct Policy {
    allowed_tags: HashSet<String>,
    allowed_attributes: HashMap<String, HashSet<String>>,
    allowed_classes: HashMap<String, HashSet<String>>,
    allowed_schemes: HashSet<String>,
    accept: Option<Box<AcceptPredicate>>,
    transform_text: Option<Box<TextTransform>>,
}

impl Default for Policy {
    /// The default whitelist: common formatting and structure tags, link and
    /// image attributes, http/https/mailto schemes, no class rules, no hooks.
    fn default() -> Self {
        let mut policy = Self::empty().allow_tags(DEFAULT_TAGS).allow_schemes(DEFAULT_SCHEMES);
        for (tag, attrs) in DEFAULT_ATTRIBUTES {
            policy = policy.allow_attributes(tag, attrs.iter().copied());
        }
        policy
    }
}

impl Policy {
    /// A policy that allows nothing. Absent fields mean "empty", never
    /// "anything".
    #[must_use]
    pub fn empty() -> Self {
        Self {
            allowed_tags: HashSet::new(),
            allowed_attributes: HashMap::new(),
            allowed_classes: HashMap::new(),
            allowed_schemes: HashSet::new(),
            accept: None,
            transform_text: None,
        }
    }

    /// Add tags to the allowed-tag set.
    #[must_use]
    pub fn allow_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add allowed attributes for `tag` (use [`WILDCARD`] for every tag).
    #[must_use]
    pub fn allow_attributes<I, S>(mut self, tag: &str, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_attributes
            .entry(tag.to_owned())
            .or_default()
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Add allowed class names for `tag`.
    #[must_use]
    pub fn allow_classes<I, S>(mut self, tag: &str, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_classes
            .entry(tag.to_owned())
            .or_default()
            .extend(classes.into_iter().map(Into::into));
        self
    }

    /// Add URL schemes (without the trailing colon) to the allowed set.
    #[must_use]
    pub fn allow_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_schemes.extend(schemes.into_iter().map(Into::into));
        self
    }

    /// Install an accept predicate consulted for every otherwise-allowed
    /// start tag. Failures inside the predicate propagate to the caller;
    /// the core never swallows them.
    #[must_use]
    pub fn with_accept<F>(mut self, accept: F) -> Self
    where
        F: Fn(&str, &[Attribute]) -> bool + Send + Sync + 'static,
    {
        self.accept = Some(Box::new(accept));
        self
    }

    /// Install a transform applied to every emitted text run.
    #[must_use]
    pub fn with_text_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform_text = Some(Box::new(transform));
        self
    }

    /// Is `tag` (lowercase) in the allowed-tag set?
    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    /// Is `attribute` (lowercase) allowed on `tag`, either tag-specifically
    /// or via the wildcard entry?
    #[must_use]
    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        let in_set = |t: &str| {
            self.allowed_attributes
                .get(t)
                .is_some_and(|set| set.contains(attribute))
        };
        in_set(tag) || in_set(WILDCARD)
    }

    /// The allowed class names for `tag`, if any were configured.
    #[must_use]
    pub fn allowed_classes(&self, tag: &str) -> Option<&HashSet<String>> {
        self.allowed_classes.get(tag)
    }

    /// Is `scheme` (without the colon, case-sensitive) allowed?
    #[must_use]
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.allowed_schemes.contains(scheme)
    }

    /// Run the accept predicate for a start tag. `true` when no predicate
    /// is configured.
    #[must_use]
    pub fn accepts(&self, tag: &str, attributes: &[Attribute]) -> bool {
        self.accept.as_ref().is_none_or(|accept| accept(tag, attributes))
    }

    /// Apply the text transform, if configured.
    #[must_use]
    pub fn transform_text(&self, text: &str) -> String {
        self.transform_text
            .as_ref()
            .map_or_else(|| text.to_owned(), |transform| transform(text))
    }

    /// True when this policy uses only the features a fixed-profile native
    /// engine supports: the default scheme set (or a subset), no class
    /// rules, no accept predicate, no text transform.
    #[must_use]
    pub fn within_baseline(&self) -> bool {
        self.allowed_classes.is_empty()
            && self.accept.is_none()
            && self.transform_text.is_none()
            && self
                .allowed_schemes
                .iter()
                .all(|scheme| DEFAULT_SCHEMES.contains(&scheme.as_str()))
    }
}

/// Error loading or parsing a policy file.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The file could not be read.
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid policy JSON.
    #[error("invalid policy file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The on-disk, partial form of a policy.
///
/// Every field is optional; [`PolicyFile::resolve`] fills absent fields from
/// the defaults, which is the whole of the "option resolution" step - the
/// core only ever sees the resolved [`Policy`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyFile {
    /// Allowed tag names. Absent = default tag set.
    pub allowed_tags: Option<Vec<String>>,
    /// Allowed attributes per tag (`"*"` = every tag). Absent = defaults.
    pub allowed_attributes: Option<HashMap<String, Vec<String>>>,
    /// Allowed class names per tag. Absent = none.
    pub allowed_classes: Option<HashMap<String, Vec<String>>>,
    /// Allowed URL schemes, without colons. Absent = http, https, mailto.
    pub allowed_schemes: Option<Vec<String>>,
}

impl PolicyFile {
    /// Read and parse a policy file.
    ///
    /// # Errors
    /// Returns [`PolicyError`] when the file cannot be read or is not valid
    /// policy JSON.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolve into a full [`Policy`], defaulting absent fields.
    #[must_use]
    pub fn resolve(self) -> Policy {
        let mut policy = Policy::empty();

        policy = match self.allowed_tags {
            Some(tags) => policy.allow_tags(tags),
            None => policy.allow_tags(DEFAULT_TAGS),
        };

        match self.allowed_attributes {
            Some(map) => {
                for (tag, attrs) in map {
                    policy = policy.allow_attributes(&tag, attrs);
                }
            }
            None => {
                for (tag, attrs) in DEFAULT_ATTRIBUTES {
                    policy = policy.allow_attributes(tag, attrs.iter().copied());
                }
            }
        }

        if let Some(map) = self.allowed_classes {
            for (tag, classes) in map {
                policy = policy.allow_classes(&tag, classes);
            }
        }

        policy = match self.allowed_schemes {
            Some(schemes) => policy.allow_schemes(schemes),
            None => policy.allow_schemes(DEFAULT_SCHEMES),
        };

        policy
    }
}
