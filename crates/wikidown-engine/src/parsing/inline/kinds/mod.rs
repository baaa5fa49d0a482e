//! # Inline Kinds
//!
//! Each inline construct owns its syntax: delimiters and patterns live here,
//! the transformer only applies them in order.
//!
//! - **`CodeSpan`**: backtick raw zone
//! - **`EmbedMode`** / **`EmbedTarget`**: `![[..]]` and `{{embed:..}}`
//! - **`Image`**, **`Link`**: `![alt](url)`, `[label](url)`
//! - **`WikiLink`** / **`TargetRef`**: `[[target|alias]]`
//! - **`Emphasis`**: `**strong**`, `*em*`
//! - **`Autolink`**: bare http(s) URLs

pub mod autolink;
pub mod code_span;
pub mod embed;
pub mod emphasis;
pub mod link;
pub mod wikilink;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use embed::{EmbedMode, EmbedTarget};
pub use emphasis::Emphasis;
pub use link::{Image, Link};
pub use wikilink::{TargetRef, WikiLink};
