//! # Rendering
//!
//! [`render`] is the engine's public entry point: raw wiki-flavoured
//! markdown plus a [`DocumentResolver`] in, an HTML fragment out.
//!
//! Rendering never fails. Malformed syntax degrades to literal text and
//! unresolved references render as unresolved links or placeholders.

pub mod escape;
pub mod html;

pub use escape::{escape_html, safe_url};
pub use html::HtmlWriter;

use crate::parsing::scan_blocks;
use crate::resolver::DocumentResolver;

/// Renders `text` to an HTML fragment.
///
/// All state is local to the call, so one resolver can serve any number of
/// concurrent renders.
pub fn render(text: &str, resolver: &dyn DocumentResolver) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut writer = HtmlWriter::new(resolver);
    for event in scan_blocks(text) {
        writer.write(&event);
    }
    writer.finish()
}
