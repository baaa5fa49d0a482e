//! # Parsing
//!
//! Single-pass, line-oriented parsing of wiki-flavoured markdown.
//!
//! - **`source`**: borrowed line iteration
//! - **`blocks`**: line classification and the block state machine, producing
//!   [`BlockEvent`]s that borrow from the source text
//! - **`inline`**: span-level transformation of one line/cell into HTML,
//!   including wiki-link and embed resolution
//!
//! Nothing here keeps state between calls; every scan owns its own stack.

pub mod blocks;
pub mod inline;
pub mod source;

use blocks::{BlockBuilder, BlockEvent, MarkdownLineClassifier};

/// Scans `text` into a flat sequence of block events.
pub fn scan_blocks(text: &str) -> Vec<BlockEvent<'_>> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in source::lines(text) {
        let lc = classifier.classify(&line);
        builder.push(lc);
    }

    builder.finish()
}
