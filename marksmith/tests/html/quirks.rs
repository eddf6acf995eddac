//! Pinned behaviour of the pass order
//!
//! These outputs are not what a CommonMark renderer would produce. They are
//! what the ordered substitutions produce, and callers depend on them staying
//! put.

use marksmith::parse;
use pretty_assertions::assert_eq;

#[test]
fn lists_split_by_blank_line_stay_separate() {
    assert_eq!(
        parse("- a\n\n- b"),
        "<p><ul><li>a</li></ul></p><p><ul><li>b</li></ul></p>"
    );
}

#[test]
fn different_list_kinds_are_not_merged() {
    assert_eq!(
        parse("- a\n1. b\n- c"),
        "<p><ul><li>a</li></ul>\n<ol><li>b</li></ol>\n<ul><li>c</li></ul></p>"
    );
}

#[test]
fn star_bullets_are_eaten_by_italic_first() {
    assert_eq!(
        parse("* a\n* b\n* c"),
        "<p><em> a\n</em> b\n<ul><li>c</li></ul></p>"
    );
}

#[test]
fn underscores_in_urls_turn_into_emphasis() {
    assert_eq!(
        parse("[a](http://x.com/a_b_c)"),
        r#"<p><a href="http://x.com/a<em>b</em>c" target="_blank" rel="noopener noreferrer">a</a></p>"#
    );
}

#[test]
fn inline_code_content_is_not_escaped() {
    assert_eq!(parse("`<div>`"), "<p><code><div></code></p>");
}

#[test]
fn header_whitespace_can_cross_a_line_break() {
    assert_eq!(parse("#\nTitle"), "<p><h1>Title</h1></p>");
}

#[test]
fn single_newlines_survive_inside_the_paragraph() {
    assert_eq!(parse("line one\nline two"), "<p>line one\nline two</p>");
}

#[test]
fn quotes_split_by_blank_line_are_not_joined() {
    assert_eq!(
        parse("> a\n\n> b"),
        "<p><blockquote>a</blockquote></p><p><blockquote>b</blockquote></p>"
    );
}

#[test]
fn unterminated_constructs_degrade_to_text() {
    assert_eq!(parse("**open"), "<p>**open</p>");
    assert_eq!(parse("[label](no-close"), "<p>[label](no-close</p>");
    assert_eq!(parse("```\nnever closed"), "<p>```\nnever closed</p>");
}

#[test]
fn reparsing_output_is_not_idempotent() {
    let once = parse("# Title\n\ntext");
    let twice = parse(&once);
    assert_eq!(once, "<p><h1>Title</h1></p><p>text</p>");
    assert_eq!(twice, "<p><p><h1>Title</h1></p><p>text</p></p>");
    assert_ne!(once, twice);
}

#[test]
fn crlf_line_endings_match_lf_output() {
    assert_eq!(parse("---\r\n"), "<p><hr /></p>");
    assert_eq!(
        parse("# Title\r\n\r\ntext\r\n"),
        "<p><h1>Title</h1></p><p>text</p>"
    );
    assert_eq!(
        parse("- a\r\n- b\r\n"),
        "<p><ul><li>a</li>\n<li>b</li></ul></p>"
    );
    assert_eq!(parse("> a\r\n> b"), parse("> a\n> b"));
}
