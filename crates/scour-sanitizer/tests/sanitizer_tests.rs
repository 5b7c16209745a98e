//! Integration tests for the whitelist filter and sanitize pipeline.

use scour_sanitizer::{
    EngineError, Policy, PolicyFile, Sanitizer, SanitizerEngine, sanitize, sanitize_with,
};

#[test]
fn script_is_suppressed_and_paragraph_survives() {
    assert_eq!(sanitize("<script>alert(1)</script><p>Hello</p>"), "<p>Hello</p>");
}

#[test]
fn javascript_scheme_is_stripped_from_href() {
    assert_eq!(sanitize(r#"<a href="javascript:alert(1)">x</a>"#), "<a>x</a>");
}

#[test]
fn class_whitelist_filters_class_tokens() {
    let policy = Policy::empty()
        .allow_tags(["div"])
        .allow_classes("div", ["foo"]);
    assert_eq!(
        sanitize_with(r#"<div class="foo bar">t</div>"#, &policy),
        r#"<div class="foo">t</div>"#
    );
}

#[test]
fn suppressed_subtree_leaves_allowed_ancestors_intact() {
    let policy = Policy::empty().allow_tags(["div", "span"]);
    assert_eq!(
        sanitize_with("<div><span><script>x</script></span></div>", &policy),
        "<div><span></span></div>"
    );
}

#[test]
fn void_element_is_emitted_self_closed() {
    assert_eq!(sanitize(r#"<img src="x.jpg">"#), r#"<img src="x.jpg"/>"#);
}

#[test]
fn unterminated_element_is_closed_at_input_end() {
    let policy = Policy::empty().allow_tags(["div"]);
    assert_eq!(sanitize_with("<div>", &policy), "<div></div>");
}

#[test]
fn comments_are_always_stripped() {
    assert_eq!(sanitize("<p>a<!-- secret -->b</p>"), "<p>ab</p>");
}

#[test]
fn entity_encoded_scheme_does_not_sneak_through() {
    // The lexer decodes the value before the scheme check sees it.
    assert_eq!(sanitize(r#"<a href="java&#115;cript:alert(1)">x</a>"#), "<a>x</a>");
}

#[test]
fn colon_in_query_is_not_treated_as_a_scheme() {
    assert_eq!(
        sanitize(r#"<a href="search?q=a:b">x</a>"#),
        r#"<a href="search?q=a:b">x</a>"#
    );
}

#[test]
fn attribute_values_are_reencoded_on_output() {
    assert_eq!(
        sanitize(r#"<a href="/x?a=1&amp;b=2">x</a>"#),
        r#"<a href="/x?a=1&amp;b=2">x</a>"#
    );
    assert_eq!(
        sanitize(r#"<a href='/x"y'>x</a>"#),
        r#"<a href="/x&quot;y">x</a>"#
    );
}

#[test]
fn disallowed_attributes_are_dropped() {
    assert_eq!(
        sanitize(r#"<a href="/x" onclick="alert(1)" style="color:red">x</a>"#),
        r#"<a href="/x">x</a>"#
    );
}

#[test]
fn wildcard_attributes_apply_to_every_tag() {
    let policy = Policy::empty()
        .allow_tags(["div", "span"])
        .allow_attributes("*", ["title"]);
    assert_eq!(
        sanitize_with(r#"<div title="a"><span title="b">x</span></div>"#, &policy),
        r#"<div title="a"><span title="b">x</span></div>"#
    );
}

#[test]
fn boolean_attributes_are_emitted_bare() {
    let policy = Policy::empty()
        .allow_tags(["input"])
        .allow_attributes("input", ["disabled"]);
    assert_eq!(sanitize_with("<input disabled>", &policy), "<input disabled/>");
}

#[test]
fn nested_same_named_rejected_tags_lift_suppression_only_once() {
    assert_eq!(
        sanitize("<script><script>x</script></script><p>ok</p>"),
        "<p>ok</p>"
    );
}

#[test]
fn suppression_survives_missing_end_tags() {
    // Everything inside the rejected script is gone even though nothing
    // is ever closed explicitly.
    assert_eq!(sanitize("<div><script><p>secret"), "<div></div>");
}

#[test]
fn rejected_self_closing_tag_does_not_start_suppression() {
    // input is not in the default tag set, but it is void: dropping it must
    // not swallow the rest of the document.
    assert_eq!(sanitize("<input><p>Hello</p>"), "<p>Hello</p>");
}

#[test]
fn end_tag_of_disallowed_element_is_never_emitted() {
    assert_eq!(sanitize("</script><p>x</p>"), "<p>x</p>");
}

#[test]
fn accept_predicate_rejects_whole_subtrees() {
    let policy = Policy::empty()
        .allow_tags(["a", "b"])
        .allow_attributes("a", ["href"])
        .allow_schemes(["https"])
        .with_accept(|tag, attributes| {
            tag != "a" || attributes.iter().any(|a| a.name.eq_ignore_ascii_case("href"))
        });
    assert_eq!(
        sanitize_with(r#"<a><b>gone</b></a><a href="https://e.com">kept</a>"#, &policy),
        r#"<a href="https://e.com">kept</a>"#
    );
}

#[test]
fn text_transform_applies_to_emitted_text_only() {
    let policy = Policy::empty()
        .allow_tags(["p"])
        .with_text_transform(|text| text.to_uppercase());
    assert_eq!(
        sanitize_with("<p>hello</p><script>quiet</script>", &policy),
        "<p>HELLO</p>"
    );
}

#[test]
fn malformed_double_brackets_produce_some_string() {
    // Implementation-defined: only non-panicking, string-typed output is
    // guaranteed.
    let _ = sanitize("<<div>>");
    let _ = sanitize("<< < >> >");
}

#[test]
fn sanitizing_is_idempotent() {
    let inputs = [
        "<script>alert(1)</script><p>Hello</p>",
        r#"<a href="javascript:x">y</a>"#,
        r#"<div class="foo bar">t</div>"#,
        "<div><span><script>x</script></span>",
        r#"<img src="x.jpg">"#,
        "<p>a &amp; b</p>",
        "<div><p>unclosed",
        r#"<a href='/x"y'>q</a>"#,
    ];
    for input in inputs {
        let once = sanitize(input);
        let twice = sanitize(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn output_never_contains_disallowed_tags() {
    let policy = Policy::empty().allow_tags(["p"]);
    let hostile = "<p>a</p><SCRIPT>b</SCRIPT><style>c</style><iframe>d</iframe><p>e</p>";
    let out = sanitize_with(hostile, &policy);
    assert_eq!(out, "<p>a</p><p>e</p>");
}

#[test]
fn default_policy_resolves_from_empty_file() {
    let policy = PolicyFile::default().resolve();
    assert!(policy.allows_tag("p"));
    assert!(policy.allows_attribute("a", "href"));
    assert!(policy.allows_scheme("https"));
    assert!(!policy.allows_scheme("javascript"));
    assert!(policy.within_baseline());
}

#[test]
fn policy_file_overrides_replace_defaults() {
    let file: PolicyFile = serde_json::from_str(
        r#"{
            "allowed_tags": ["div"],
            "allowed_classes": { "div": ["foo"] },
            "allowed_schemes": ["ftp"]
        }"#,
    )
    .expect("valid policy json");
    let policy = file.resolve();
    assert!(policy.allows_tag("div"));
    assert!(!policy.allows_tag("p"));
    assert!(policy.allows_scheme("ftp"));
    assert!(!policy.allows_scheme("http"));
    // Custom schemes and class rules put it outside the fixed profile.
    assert!(!policy.within_baseline());
}

#[test]
fn unknown_policy_fields_are_rejected() {
    let result: Result<PolicyFile, _> = serde_json::from_str(r#"{ "allow_all": true }"#);
    assert!(result.is_err());
}

/// Engine that always fails, to prove fallback happens.
struct FailingEngine;

impl SanitizerEngine for FailingEngine {
    fn sanitize(&self, _html: &str, _policy: &Policy) -> Result<String, EngineError> {
        Err(EngineError::new("simulated engine failure"))
    }
}

/// Engine that returns a canned answer, to prove delegation happens.
struct CannedEngine;

impl SanitizerEngine for CannedEngine {
    fn sanitize(&self, _html: &str, _policy: &Policy) -> Result<String, EngineError> {
        Ok("from-engine".to_owned())
    }
}

#[test]
fn failing_engine_falls_back_to_the_core() {
    let input = "<script>x</script><p>ok</p>";
    let sanitizer = Sanitizer::new(Policy::default()).with_engine(Box::new(FailingEngine));
    assert_eq!(sanitizer.sanitize(input), sanitize(input));
}

#[test]
fn supported_policy_delegates_to_the_engine() {
    let sanitizer = Sanitizer::new(Policy::default()).with_engine(Box::new(CannedEngine));
    assert_eq!(sanitizer.sanitize("<p>x</p>"), "from-engine");
}

#[test]
fn unsupported_policy_bypasses_the_engine() {
    // A text transform is outside the baseline profile, so the canned
    // engine must never be consulted.
    let policy = Policy::default().with_text_transform(str::to_owned);
    let sanitizer = Sanitizer::new(policy).with_engine(Box::new(CannedEngine));
    assert_eq!(sanitizer.sanitize("<p>x</p>"), "<p>x</p>");
}
