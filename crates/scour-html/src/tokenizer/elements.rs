//! Void element classification.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
//!
//! "Void elements only have a start tag; end tags must not be specified for
//! void elements."

/// The void elements per [§ 13.1.2](https://html.spec.whatwg.org/multipage/syntax.html#void-elements).
///
/// A void element is never pushed onto the open-element stack and is always
/// serialized self-closed.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns true if `name` (already lowercased) is a void element.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::is_void_element;

    #[test]
    fn classifies_void_elements() {
        assert!(is_void_element("br"));
        assert!(is_void_element("img"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("script"));
    }
}
