use serde::{Deserialize, Serialize};

/// Minimal metadata about a document, used to label and target links.
///
/// Owned by the host application; the renderer only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Stable document identifier (what `[[doc:<id>]]` refers to)
    pub id: String,
    /// Path-like slug, e.g. `team/handbook`
    pub slug: String,
    /// Human readable title
    pub title: String,
}

impl DocumentRef {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
        }
    }

    /// Best label for this document: title, falling back to slug.
    ///
    /// Returns `None` when both are empty.
    pub fn display_label(&self) -> Option<&str> {
        [self.title.as_str(), self.slug.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }
}
