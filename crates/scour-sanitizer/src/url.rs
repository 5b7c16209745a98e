//! URL-scheme validation for URL-bearing attributes.
//!
//! The check runs on *decoded* attribute values, so `java&#115;cript:` has
//! already collapsed back to `javascript:` by the time it gets here. The
//! ordering below - testing for `?`/`#` before trusting a colon - is what
//! defeats payloads that smuggle a colon inside a query string to fake a
//! harmless scheme.

use crate::policy::Policy;

/// Attributes whose value is interpreted as a URL and therefore subject to
/// scheme validation.
const URL_ATTRIBUTES: [&str; 7] = [
    "href", "src", "cite", "background", "longdesc", "usemap", "base",
];

/// Is `name` (lowercase) a URL-bearing attribute?
#[must_use]
pub fn is_url_attribute(name: &str) -> bool {
    URL_ATTRIBUTES.contains(&name)
}

/// Decide whether a candidate URL value passes the policy's scheme rules.
///
/// Accepted when the value:
/// - starts with `#` or `/` (fragment- or path-relative, scheme-free), or
/// - contains no `:` at all (no scheme present), or
/// - has a `?` or `#` before its first `:` (the colon lives inside a query
///   or fragment, not a scheme separator), or
/// - has a scheme that case-sensitively matches an allowed scheme.
#[must_use]
pub fn scheme_permitted(value: &str, policy: &Policy) -> bool {
    if value.starts_with(['#', '/']) {
        return true;
    }
    let Some(colon) = value.find(':') else {
        return true;
    };
    let prefix = &value[..colon];
    if prefix.contains(['?', '#']) {
        return true;
    }
    policy.allows_scheme(prefix)
}

#[cfg(test)]
mod tests {
    use super::scheme_permitted;
    use crate::policy::Policy;

    #[test]
    fn relative_and_fragment_urls_pass() {
        let policy = Policy::default();
        assert!(scheme_permitted("/path/to/page", &policy));
        assert!(scheme_permitted("#section", &policy));
        assert!(scheme_permitted("page.html", &policy));
    }

    #[test]
    fn allowed_schemes_pass_and_others_fail() {
        let policy = Policy::default();
        assert!(scheme_permitted("https://example.com", &policy));
        assert!(scheme_permitted("mailto:a@example.com", &policy));
        assert!(!scheme_permitted("javascript:alert(1)", &policy));
        assert!(!scheme_permitted("data:text/html,x", &policy));
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        let policy = Policy::default();
        assert!(!scheme_permitted("HTTPS://example.com", &policy));
    }

    #[test]
    fn colon_inside_query_or_fragment_is_not_a_scheme() {
        let policy = Policy::default();
        assert!(scheme_permitted("search?q=a:b", &policy));
        assert!(scheme_permitted("page#anchor:1", &policy));
    }
}
