//! Rewrite rules, one function per pass.
//!
//! Every function takes the whole current text and returns the rewritten text.
//! Patterns are compiled once and shared.

use html_escape::encode_text;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Header patterns ordered from six `#` down to one.
static HEADERS: Lazy<Vec<(usize, Regex)>> = Lazy::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^#{{{level}}}\s+(.+)$");
            let regex = Regex::new(&pattern).expect("valid built-in pattern");
            (level, regex)
        })
        .collect()
});

static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9_]+)?\n(.*?)```").expect("valid built-in pattern"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid built-in pattern"));
static BOLD_STARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid built-in pattern"));
static BOLD_UNDERSCORES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^_]+)__").expect("valid built-in pattern"));
static ITALIC_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("valid built-in pattern"));
static ITALIC_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([^_]+)_").expect("valid built-in pattern"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid built-in pattern"));
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid built-in pattern"));
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").expect("valid built-in pattern"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s+(.+)$").expect("valid built-in pattern"));
static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^>\s+(.+)$").expect("valid built-in pattern"));
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:---|\*\*\*)$").expect("valid built-in pattern"));
static ADJACENT_UL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</ul>\s*<ul>").expect("valid built-in pattern"));
static ADJACENT_OL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</ol>\s*<ol>").expect("valid built-in pattern"));
static ADJACENT_BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</blockquote>\s*<blockquote>").expect("valid built-in pattern"));

fn replace(pattern: &Regex, text: &str, replacement: &str) -> String {
    pattern.replace_all(text, replacement).into_owned()
}

pub(crate) fn headers(text: &str) -> String {
    let mut out = text.to_string();
    for (level, pattern) in HEADERS.iter() {
        out = replace(pattern, &out, &format!("<h{level}>${{1}}</h{level}>"));
    }
    out
}

pub(crate) fn fenced_code(text: &str) -> String {
    FENCED_CODE
        .replace_all(text, |caps: &Captures| {
            let body = encode_text(caps[2].trim());
            match caps.get(1) {
                Some(lang) => format!(
                    r#"<pre><code class="language-{}">{body}</code></pre>"#,
                    lang.as_str()
                ),
                None => format!("<pre><code>{body}</code></pre>"),
            }
        })
        .into_owned()
}

pub(crate) fn inline_code(text: &str) -> String {
    replace(&INLINE_CODE, text, "<code>${1}</code>")
}

pub(crate) fn bold(text: &str) -> String {
    let stars = replace(&BOLD_STARS, text, "<strong>${1}</strong>");
    replace(&BOLD_UNDERSCORES, &stars, "<strong>${1}</strong>")
}

pub(crate) fn italic(text: &str) -> String {
    let stars = replace(&ITALIC_STAR, text, "<em>${1}</em>");
    replace(&ITALIC_UNDERSCORE, &stars, "<em>${1}</em>")
}

/// Bracket/paren pairs preceded by `!` are image syntax and are left for the
/// image pass.
pub(crate) fn links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in LINK.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        if text[..whole.start()].ends_with('!') {
            out.push_str(whole.as_str());
        } else {
            out.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                &caps[2], &caps[1]
            ));
        }
        last = whole.end();
    }
    out.push_str(&text[last..]);
    out
}

pub(crate) fn images(text: &str) -> String {
    replace(&IMAGE, text, r#"<img src="${2}" alt="${1}" />"#)
}

pub(crate) fn unordered_lists(text: &str) -> String {
    wrap_items(text, &UNORDERED_ITEM, "ul")
}

pub(crate) fn ordered_lists(text: &str) -> String {
    wrap_items(text, &ORDERED_ITEM, "ol")
}

/// Turns every line matching `item` into `<li>` and wraps each contiguous run
/// of converted lines in a single `<tag>` element.
fn wrap_items(text: &str, item: &Regex, tag: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut run_start: Option<usize> = None;

    for line in text.split('\n') {
        match item.captures(line) {
            Some(caps) => {
                if run_start.is_none() {
                    run_start = Some(lines.len());
                }
                lines.push(format!("<li>{}</li>", &caps[1]));
            }
            None => {
                if let Some(start) = run_start.take() {
                    close_run(&mut lines, start, tag);
                }
                lines.push(line.to_string());
            }
        }
    }
    if let Some(start) = run_start {
        close_run(&mut lines, start, tag);
    }

    lines.join("\n")
}

fn close_run(lines: &mut [String], start: usize, tag: &str) {
    lines[start].insert_str(0, &format!("<{tag}>"));
    if let Some(last) = lines.last_mut() {
        last.push_str(&format!("</{tag}>"));
    }
}

pub(crate) fn blockquotes(text: &str) -> String {
    replace(&BLOCKQUOTE, text, "<blockquote>${1}</blockquote>")
}

pub(crate) fn horizontal_rules(text: &str) -> String {
    replace(&HORIZONTAL_RULE, text, "<hr />")
}

pub(crate) fn paragraphs(text: &str) -> String {
    let folded = text.replace("\n\n", "</p><p>");
    let body = folded.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!("<p>{body}</p>")
    }
}

pub(crate) fn cleanup(text: &str) -> String {
    let lists = replace(&ADJACENT_UL, text, "");
    let lists = replace(&ADJACENT_OL, &lists, "");
    replace(&ADJACENT_BLOCKQUOTE, &lists, "<br>")
}
