//! The Markdown → HTML transformer.
//!
//! The transformer is a fixed, ordered chain of whole-document rewrite passes.
//! Each [`Pass`] reads the complete output of the previous one, so later rules
//! can (and sometimes do) match text introduced by earlier rules. There is no
//! syntax tree: the observable output of this pass order is the contract.
//!
//! | Order | Pass               | Rewrites                                         |
//! |-------|--------------------|--------------------------------------------------|
//! | 1     | `headers`          | `# text` … `###### text` → `<h1>` … `<h6>`       |
//! | 2     | `fenced-code`      | ```` ```lang ```` blocks → `<pre><code>` (escaped) |
//! | 3     | `inline-code`      | `` `code` `` → `<code>` (not escaped)            |
//! | 4     | `bold`             | `**x**`, then `__x__` → `<strong>`               |
//! | 5     | `italic`           | `*x*`, then `_x_` → `<em>`                       |
//! | 6     | `links`            | `[label](url)` → `<a target="_blank">`           |
//! | 7     | `images`           | `![alt](src)` → `<img />`                        |
//! | 8     | `unordered-lists`  | `- x` / `* x` runs → `<ul><li>`                  |
//! | 9     | `ordered-lists`    | `1. x` runs → `<ol><li>`                         |
//! | 10    | `blockquotes`      | `> x` → `<blockquote>` per line                  |
//! | 11    | `horizontal-rules` | `---` / `***` lines → `<hr />`                   |
//! | 12    | `paragraphs`       | blank lines → `</p><p>`, whole text in `<p>`     |
//! | 13    | `cleanup`          | merge adjacent lists, join quotes with `<br>`    |
//!
//! Windows line endings are folded to `\n` before the first pass, so every
//! line rule sees the same text whatever the source platform.
//!
//! The transformer never fails: malformed input degrades into literal or
//! partially rewritten text.

mod rules;

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// One rewrite pass of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pass {
    Headers,
    FencedCode,
    InlineCode,
    Bold,
    Italic,
    Links,
    Images,
    UnorderedLists,
    OrderedLists,
    Blockquotes,
    HorizontalRules,
    Paragraphs,
    Cleanup,
}

impl Pass {
    /// Every pass, in execution order.
    pub const ALL: [Pass; 13] = [
        Pass::Headers,
        Pass::FencedCode,
        Pass::InlineCode,
        Pass::Bold,
        Pass::Italic,
        Pass::Links,
        Pass::Images,
        Pass::UnorderedLists,
        Pass::OrderedLists,
        Pass::Blockquotes,
        Pass::HorizontalRules,
        Pass::Paragraphs,
        Pass::Cleanup,
    ];

    /// Stable kebab-case name, used by the CLI and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Pass::Headers => "headers",
            Pass::FencedCode => "fenced-code",
            Pass::InlineCode => "inline-code",
            Pass::Bold => "bold",
            Pass::Italic => "italic",
            Pass::Links => "links",
            Pass::Images => "images",
            Pass::UnorderedLists => "unordered-lists",
            Pass::OrderedLists => "ordered-lists",
            Pass::Blockquotes => "blockquotes",
            Pass::HorizontalRules => "horizontal-rules",
            Pass::Paragraphs => "paragraphs",
            Pass::Cleanup => "cleanup",
        }
    }

    /// Look up a pass by its [`name`](Pass::name).
    pub fn from_name(name: &str) -> Option<Pass> {
        Pass::ALL.into_iter().find(|pass| pass.name() == name)
    }

    /// Run this single pass over `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Pass::Headers => rules::headers(text),
            Pass::FencedCode => rules::fenced_code(text),
            Pass::InlineCode => rules::inline_code(text),
            Pass::Bold => rules::bold(text),
            Pass::Italic => rules::italic(text),
            Pass::Links => rules::links(text),
            Pass::Images => rules::images(text),
            Pass::UnorderedLists => rules::unordered_lists(text),
            Pass::OrderedLists => rules::ordered_lists(text),
            Pass::Blockquotes => rules::blockquotes(text),
            Pass::HorizontalRules => rules::horizontal_rules(text),
            Pass::Paragraphs => rules::paragraphs(text),
            Pass::Cleanup => rules::cleanup(text),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The text as it stood right after a pass ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassSnapshot {
    pub pass: Pass,
    pub text: String,
}

/// Convert Markdown source into an HTML fragment.
///
/// Always returns a string; empty or whitespace-only input yields an empty
/// string.
pub fn parse(markdown: &str) -> String {
    parse_through(markdown, Pass::Cleanup)
}

/// Fold `\r\n` line endings into `\n`.
///
/// A lone `\r` is left alone.
pub fn normalize_line_endings(markdown: &str) -> Cow<'_, str> {
    if markdown.contains("\r\n") {
        Cow::Owned(markdown.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(markdown)
    }
}

/// Run the pipeline up to and including `last`.
pub fn parse_through(markdown: &str, last: Pass) -> String {
    let mut text = normalize_line_endings(markdown).into_owned();
    for pass in Pass::ALL {
        text = pass.apply(&text);
        tracing::trace!(pass = pass.name(), bytes = text.len(), "applied pass");
        if pass == last {
            break;
        }
    }
    text
}

/// Run the whole pipeline, recording the text after every pass.
pub fn trace(markdown: &str) -> Vec<PassSnapshot> {
    let mut snapshots: Vec<PassSnapshot> = Vec::with_capacity(Pass::ALL.len());
    let mut text = normalize_line_endings(markdown).into_owned();
    for pass in Pass::ALL {
        text = pass.apply(&text);
        snapshots.push(PassSnapshot {
            pass,
            text: text.clone(),
        });
    }
    snapshots
}
