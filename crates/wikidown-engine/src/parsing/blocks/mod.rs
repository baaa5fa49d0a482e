//! # Block Parsing
//!
//! Phase 1 classifies every line on its own ([`MarkdownLineClassifier`]).
//! Phase 2 ([`BlockBuilder`]) walks the classified lines once, holding at most
//! one open leaf construct plus the [`ListStack`], and emits [`BlockEvent`]s.
//!
//! Syntax knowledge lives in [`kinds`]; the builder only decides precedence.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod list_stack;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use list_stack::{ListContext, ListStack};
pub use types::BlockEvent;
