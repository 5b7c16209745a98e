use core::fmt;

/// An attribute on a start tag.
///
/// `value` is `None` for boolean attributes written without `=`, e.g. the
/// `disabled` in `<input disabled>`. Name case is preserved exactly as it
/// appeared in the input; the filter lowercases for comparisons only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, original case preserved.
    pub name: String,
    /// Decoded attribute value, or `None` for a boolean attribute.
    pub value: Option<String>,
}

impl Attribute {
    /// Create an attribute with a decoded value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Create a boolean attribute (no value).
    #[must_use]
    pub const fn boolean(name: String) -> Self {
        Self { name, value: None }
    }
}

/// A structural token produced by the tokenizer.
///
/// Tokens are transient: the tokenizer yields them one at a time and the
/// filter consumes them immediately. Nothing here is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag, e.g. `<a href="/">`.
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Set when the tag was written with a trailing `/` or names a void
        /// element.
        self_closing: bool,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
    },

    /// A closing tag, e.g. `</a>`. Also synthesized by the tokenizer to
    /// auto-close elements left open by malformed input.
    EndTag {
        /// Lowercased tag name.
        name: String,
    },

    /// A run of character data between tags, still entity-encoded as it
    /// appeared in the input.
    Text {
        /// The raw text slice.
        data: String,
    },

    /// An HTML comment. Always dropped by the filter; exists so comment
    /// interiors are never mistaken for markup.
    Comment {
        /// The text between `<!--` and `-->`.
        data: String,
    },
}

impl Token {
    /// The tag name for start and end tags, `None` otherwise.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    match &attr.value {
                        Some(value) => write!(f, " {}=\"{value}\"", attr.name)?,
                        None => write!(f, " {}", attr.name)?,
                    }
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
        }
    }
}
