//! Fragment output (Markdown → HTML fragment)

use insta::assert_snapshot;
use marksmith::{parse, parse_through, Pass};
use pretty_assertions::assert_eq;

// ============================================================================
// BLOCK ELEMENTS
// ============================================================================

#[test]
fn test_every_header_level() {
    for level in 1..=6 {
        let source = format!("{} text", "#".repeat(level));
        assert_eq!(
            parse_through(&source, Pass::Headers),
            format!("<h{level}>text</h{level}>")
        );

        let html = parse(&source);
        for other in (1..=6).filter(|other| *other != level) {
            let tag = format!("<h{other}>");
            assert!(!html.contains(&tag), "h{other} fired for level {level}");
        }
    }
}

#[test]
fn test_fenced_code_with_language() {
    let html = parse("```js\nif (a < b && c > d) {}\n```");
    assert_eq!(
        html,
        r#"<p><pre><code class="language-js">if (a &lt; b &amp;&amp; c &gt; d) {}</code></pre></p>"#
    );
}

#[test]
fn test_fenced_code_without_language() {
    let html = parse("```\n  plain  \n```");
    assert_eq!(html, "<p><pre><code>plain</code></pre></p>");
}

#[test]
fn test_unordered_list_is_one_block() {
    let html = parse("- a\n- b\n- c");
    assert_eq!(html, "<p><ul><li>a</li>\n<li>b</li>\n<li>c</li></ul></p>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn test_ordered_list() {
    let html = parse("1. one\n2. two\n10. ten");
    assert_eq!(
        html,
        "<p><ol><li>one</li>\n<li>two</li>\n<li>ten</li></ol></p>"
    );
}

#[test]
fn test_star_bullet() {
    assert_eq!(parse("* item"), "<p><ul><li>item</li></ul></p>");
}

#[test]
fn test_blockquote_lines_join_with_br() {
    assert_eq!(parse("> a\n> b"), "<p><blockquote>a<br>b</blockquote></p>");
}

#[test]
fn test_horizontal_rules() {
    assert_eq!(parse("---"), "<p><hr /></p>");
    assert_eq!(parse("***"), "<p><hr /></p>");
    assert_eq!(parse("----"), "<p>----</p>");
}

#[test]
fn test_paragraphs() {
    assert_eq!(parse("one\n\ntwo"), "<p>one</p><p>two</p>");
    assert_eq!(parse("\n\n  text  \n"), "<p></p><p>  text</p>");
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), "");
    assert_eq!(parse("   \n"), "");
}

// ============================================================================
// INLINE ELEMENTS
// ============================================================================

#[test]
fn test_bold_and_italic() {
    assert_eq!(parse("**bold**"), "<p><strong>bold</strong></p>");
    assert_eq!(parse("__bold__"), "<p><strong>bold</strong></p>");
    assert_eq!(parse("*italic*"), "<p><em>italic</em></p>");
    assert_eq!(parse("_italic_"), "<p><em>italic</em></p>");
}

#[test]
fn test_bold_italic_keeps_strong_intact() {
    assert_eq!(parse("***both***"), "<p><em><strong>both</strong></em></p>");
}

#[test]
fn test_nested_emphasis() {
    assert_eq!(
        parse("*em **bold** em*"),
        "<p><em>em <strong>bold</strong> em</em></p>"
    );
}

#[test]
fn test_inline_code() {
    assert_eq!(parse("use `cargo`"), "<p>use <code>cargo</code></p>");
}

#[test]
fn test_link() {
    assert_eq!(
        parse("[x](http://e.com)"),
        r#"<p><a href="http://e.com" target="_blank" rel="noopener noreferrer">x</a></p>"#
    );
}

#[test]
fn test_image() {
    assert_eq!(
        parse("![a](http://e.com/i.png)"),
        r#"<p><img src="http://e.com/i.png" alt="a" /></p>"#
    );
}

#[test]
fn test_image_and_link_on_one_line() {
    let html = parse("![logo](l.png) [home](/)");
    assert!(html.contains(r#"<img src="l.png" alt="logo" />"#));
    assert!(html.contains(r#"<a href="/" target="_blank" rel="noopener noreferrer">home</a>"#));
}

#[test]
fn test_emphasis_inside_link_label() {
    assert_eq!(
        parse("[**x**](u)"),
        r#"<p><a href="u" target="_blank" rel="noopener noreferrer"><strong>x</strong></a></p>"#
    );
}

// ============================================================================
// WHOLE DOCUMENT
// ============================================================================

#[test]
fn test_kitchensink() {
    let source = "# Title\n\
                  \n\
                  Some **bold** and *italic* text with `code`.\n\
                  \n\
                  - one\n\
                  - two\n\
                  \n\
                  1. first\n\
                  2. second\n\
                  \n\
                  > quoted\n\
                  > again\n\
                  \n\
                  ---\n\
                  \n\
                  ```rust\n\
                  let x = 1 < 2;\n\
                  ```\n";

    assert_snapshot!(parse(source), @r#"
    <p><h1>Title</h1></p><p>Some <strong>bold</strong> and <em>italic</em> text with <code>code</code>.</p><p><ul><li>one</li>
    <li>two</li></ul></p><p><ol><li>first</li>
    <li>second</li></ol></p><p><blockquote>quoted<br>again</blockquote></p><p><hr /></p><p><pre><code class="language-rust">let x = 1 &lt; 2;</code></pre></p>
    "#);
}

#[test]
fn test_parse_is_deterministic() {
    let source = "# a\n\n- b\n- c\n\n> d\n> e\n\n[f](g) ![h](i)";
    assert_eq!(parse(source), parse(source));
}
