//! # Block Kinds
//!
//! Each block type owns its syntax: delimiters, detection and prefix stripping
//! live here rather than in the classifier or builder.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list_item::{ListItem, ListKind, ListLine};
pub use table::Table;
pub use thematic_break::ThematicBreak;
