//! Markdown to HTML, one rewrite pass at a time
//!
//!     marksmith converts a small, fixed subset of Markdown into HTML with an ordered chain of
//!     whole-document substitutions (see ./transformer/mod.rs). There is no syntax tree: each
//!     pass rewrites the complete output of the previous one. The output of that exact pass
//!     order, quirks included, is the contract.
//!
//!     This is a pure lib: no code here assumes a shell, reads env vars or prints. The CLI lives
//!     in marksmith-cli and configuration in marksmith-config.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # render + write-or-return in one call
//!     ├── formats
//!     │   ├── html                # bare fragment
//!     │   └── document            # standalone page with embedded CSS
//!     ├── transformer
//!     │   ├── mod.rs              # Pass list, parse / parse_through / trace
//!     │   └── rules.rs            # the rewrite rules
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     ├── html                    # end-to-end fragment and document output
//!     └── properties.rs           # proptest: never panics, deterministic
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes them.
//!
//! Formats
//!
//!     Every format takes Markdown in and gives text out (see ./format.rs):
//!     - html:          exactly what [`parse`] returns
//!     - html-document: the fragment inside a full HTML5 page with inlined CSS
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;
pub mod transformer;

pub use error::FormatError;
pub use format::Format;
pub use publish::{publish, PublishArtifact, PublishResult, PublishSpec};
pub use registry::FormatRegistry;
pub use transformer::{normalize_line_endings, parse, parse_through, trace, Pass, PassSnapshot};
