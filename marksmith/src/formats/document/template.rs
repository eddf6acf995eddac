//! Standalone page template
//!
//! Fragment → complete HTML5 document with the stylesheets inlined, so the
//! result opens correctly from disk with no other files around it.

use super::{DocumentOptions, DocumentTheme};

const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");
const THEME_MODERN_CSS: &str = include_str!("../../../css/themes/theme-modern.css");
const THEME_SERIF_CSS: &str = include_str!("../../../css/themes/theme-serif.css");

/// The baseline stylesheet embedded in every exported document.
pub fn default_css() -> &'static str {
    BASELINE_CSS
}

fn theme_css(theme: DocumentTheme) -> &'static str {
    match theme {
        DocumentTheme::Modern => THEME_MODERN_CSS,
        DocumentTheme::Serif => THEME_SERIF_CSS,
    }
}

pub(crate) fn wrap_in_document(body_html: &str, options: &DocumentOptions) -> String {
    let theme_css = theme_css(options.theme);
    // Custom CSS is appended after baseline and theme
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = escape_title(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="marksmith">
  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{theme_css}
{custom_css}
  </style>
</head>
<body>
{body_html}
</body>
</html>"#
    )
}

fn escape_title(title: &str) -> String {
    html_escape::encode_double_quoted_attribute(title).into_owned()
}
