//! HTML output tests
//!
//! End-to-end checks of the fragment the transformer emits and of the
//! standalone document built around it.

mod document;
mod fragment;
mod quirks;
