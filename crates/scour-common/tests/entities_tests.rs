//! Integration tests for the entity codec.

use scour_common::entities::{decode, encode};

#[test]
fn encode_escapes_markup_significant_characters() {
    assert_eq!(encode("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    assert_eq!(encode("say \"hi\""), "say &quot;hi&quot;");
    assert_eq!(encode("plain text"), "plain text");
}

#[test]
fn decode_named_references() {
    assert_eq!(decode("&lt;b&gt;"), "<b>");
    assert_eq!(decode("a &amp; b"), "a & b");
    assert_eq!(decode("&quot;&apos;"), "\"'");
    assert_eq!(decode("x&nbsp;y"), "x\u{A0}y");
}

#[test]
fn decode_numeric_references() {
    assert_eq!(decode("&#60;"), "<");
    assert_eq!(decode("&#x3C;"), "<");
    assert_eq!(decode("&#x3c;"), "<");
    assert_eq!(decode("&#39;"), "'");
}

#[test]
fn unknown_or_unterminated_references_pass_through() {
    assert_eq!(decode("&bogus;"), "&bogus;");
    assert_eq!(decode("&amp"), "&amp");
    assert_eq!(decode("a&b"), "a&b");
    assert_eq!(decode("&;"), "&;");
    assert_eq!(decode("&"), "&");
}

#[test]
fn malformed_numeric_references_degrade_to_replacement() {
    // Oversized escape overflows u32.
    assert_eq!(decode("&#99999999999999;"), "\u{FFFD}");
    // Surrogate code points are not characters.
    assert_eq!(decode("&#xD800;"), "\u{FFFD}");
    // Past the end of Unicode.
    assert_eq!(decode("&#x110000;"), "\u{FFFD}");
}

#[test]
fn round_trips_on_markup_characters() {
    let significant = "<>&\"'";
    assert_eq!(decode(&encode(significant)), significant);
    // encode(decode(x)) for already-encoded input.
    let encoded = "&lt;&gt;&amp;&quot;&#39;";
    assert_eq!(encode(&decode(encoded)), encoded);
}
