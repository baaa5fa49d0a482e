//! # Inline Transformation
//!
//! Turns the raw text of one line (or table cell, or quote line) into HTML.
//!
//! ## Modules
//!
//! - **`cursor`**: byte `Cursor` used for code-span extraction
//! - **`parser`**: `split_code_spans()`, the raw-zone pass
//! - **`kinds`**: syntax owned by each inline construct
//! - **`pieces`**: ordered `Text`/`Markup` buffer the passes rewrite
//! - **`transform`**: `render_inline()`, the fixed pass order
//!
//! ## Precedence
//!
//! Code spans win over everything: `` `[[x]]` `` is code, not a wiki-link.
//! After that each pass only sees text no earlier pass has claimed, so a
//! link label is never emphasised and a URL inside an anchor is never
//! autolinked a second time.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod pieces;
pub mod transform;
pub mod types;

pub use parser::split_code_spans;
pub use transform::render_inline;
pub use types::{Piece, Segment};
