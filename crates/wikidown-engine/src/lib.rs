//! Wiki-flavoured markdown to HTML.
//!
//! [`render`] turns a document into an HTML fragment, resolving
//! `[[wiki-links]]` and embed references through a [`DocumentResolver`].
//! Embeds come out as placeholders; [`fill_embeds`] is the optional second
//! phase that splices the referenced content in.

pub mod embeds;
pub mod io;
pub mod links;
pub mod models;
pub mod parsing;
pub mod render;
pub mod resolver;
pub mod slug;

#[cfg(test)]
pub mod tests;

pub use embeds::{EmbedError, EmbedFiller, EmbedSource, EmbeddedDocument, fill_embeds};
pub use io::{DocLibrary, IoError};
pub use links::{DocLink, extract_doc_links, resolve_linked_ids};
pub use models::DocumentRef;
pub use render::render;
pub use resolver::{DocIndex, DocumentResolver, NoDocuments};
