//! Standalone document output (Markdown → full HTML page)

use marksmith::format::Format;
use marksmith::formats::{default_css, DocumentFormat, DocumentOptions, DocumentTheme};
use marksmith::FormatRegistry;
use std::collections::HashMap;

fn document(markdown: &str, theme: DocumentTheme) -> String {
    DocumentFormat::with_theme(theme).render(markdown).unwrap()
}

#[test]
fn test_document_structure() {
    let html = document("# Hello", DocumentTheme::Modern);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    ));
    assert!(html.contains("<meta name=\"generator\" content=\"marksmith\">"));
    assert!(html.contains("<title>Converted Markdown</title>"));
    assert!(html.contains("<body>\n<p><h1>Hello</h1></p>\n</body>\n</html>"));
}

#[test]
fn test_body_is_the_fragment() {
    let markdown = "- a\n- b\n\n> quote";
    let html = document(markdown, DocumentTheme::Modern);
    let fragment = marksmith::parse(markdown);
    assert!(html.contains(&format!("<body>\n{fragment}\n</body>")));
}

#[test]
fn test_css_embedded() {
    let html = document("text", DocumentTheme::Modern);
    assert!(html.contains("<style>"));
    assert!(html.contains(default_css()));
    assert!(!html.contains("Georgia, serif"));
}

#[test]
fn test_serif_theme() {
    let html = document("text", DocumentTheme::Serif);
    assert!(html.contains(default_css()));
    assert!(html.contains("Georgia, serif"));
}

#[test]
fn test_explicit_options() {
    let options = DocumentOptions::default()
        .with_title("Release notes")
        .with_custom_css(".note { color: teal; }");
    let html = DocumentFormat::default().render_document("text", &options);
    assert!(html.contains("<title>Release notes</title>"));
    assert!(html.contains(".note { color: teal; }"));
}

#[test]
fn test_registry_options_select_theme() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("theme".to_string(), "serif".to_string());
    let html = registry
        .render_with_options("text", "html-document", &options)
        .unwrap();
    assert!(html.contains("Georgia, serif"));
}

#[test]
fn test_unknown_theme_falls_back_to_modern() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("theme".to_string(), "neon".to_string());
    let html = registry
        .render_with_options("text", "html-document", &options)
        .unwrap();
    assert!(html.contains(default_css()));
    assert!(!html.contains("Georgia, serif"));
}
