//! # Embeds
//!
//! [`render`](crate::render::render) only emits `md-embed` placeholders. This
//! module is the second phase: fetch the referenced documents, cut them down
//! to the requested fragment, render them and splice the result into the
//! placeholders.
//!
//! - **`section`**: fragment lookup by heading or `^anchor`
//! - **`fill`**: placeholder scanning and replacement

pub mod fill;
pub mod section;

pub use fill::{DEFAULT_MAX_DEPTH, EmbedFiller, fill_embeds};
pub use section::{extract_section, normalize_heading};

/// Errors fetching an embedded document.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Could not read {slug}: {source}")]
    Read {
        slug: String,
        source: std::io::Error,
    },
    #[error("Embed loop: {0} embeds itself")]
    Cycle(String),
}

/// A document's content as fetched for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedDocument {
    pub slug: String,
    pub title: String,
    pub content: String,
}

/// Where embedded content comes from.
pub trait EmbedSource {
    fn fetch(&self, slug: &str) -> Result<EmbeddedDocument, EmbedError>;
}

impl<T: EmbedSource + ?Sized> EmbedSource for &T {
    fn fetch(&self, slug: &str) -> Result<EmbeddedDocument, EmbedError> {
        (**self).fetch(slug)
    }
}
