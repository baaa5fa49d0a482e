//! # Document Resolution
//!
//! The renderer never owns documents. It asks a [`DocumentResolver`] for the
//! minimal metadata it needs to label and target wiki-links and embeds.
//!
//! - **`DocumentResolver`**: two-method capability any storage backend can implement
//! - **`DocIndex`**: in-memory map implementation keyed by id and cleaned slug
//! - **`NoDocuments`**: resolves nothing; every reference renders unresolved

use std::collections::HashMap;

use crate::models::DocumentRef;
use crate::slug::clean_slug;

/// Maps document ids and slugs to [`DocumentRef`]s.
///
/// Implementations are expected to be cheap, synchronous lookups. Both
/// methods may return `None`; an absent result is a normal outcome.
pub trait DocumentResolver {
    fn resolve_by_id(&self, id: &str) -> Option<DocumentRef>;
    fn resolve_by_slug(&self, slug: &str) -> Option<DocumentRef>;
}

impl<T: DocumentResolver + ?Sized> DocumentResolver for &T {
    fn resolve_by_id(&self, id: &str) -> Option<DocumentRef> {
        (**self).resolve_by_id(id)
    }

    fn resolve_by_slug(&self, slug: &str) -> Option<DocumentRef> {
        (**self).resolve_by_slug(slug)
    }
}

/// A resolver with no documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDocuments;

impl DocumentResolver for NoDocuments {
    fn resolve_by_id(&self, _id: &str) -> Option<DocumentRef> {
        None
    }

    fn resolve_by_slug(&self, _slug: &str) -> Option<DocumentRef> {
        None
    }
}

/// In-memory document index.
///
/// Slugs are cleaned (see [`clean_slug`]) both when inserted and when looked
/// up, so `team/handbook.md` and `team/handbook` find the same document.
#[derive(Debug, Default, Clone)]
pub struct DocIndex {
    by_id: HashMap<String, DocumentRef>,
    slug_to_id: HashMap<String, String>,
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any previous entry with the same id or slug.
    pub fn insert(&mut self, doc: DocumentRef) {
        if let Some(previous) = self.by_id.remove(&doc.id) {
            self.slug_to_id.remove(&clean_slug(&previous.slug));
        }
        let slug = clean_slug(&doc.slug);
        if let Some(stale_id) = self.slug_to_id.insert(slug, doc.id.clone())
            && stale_id != doc.id
        {
            self.by_id.remove(&stale_id);
        }
        self.by_id.insert(doc.id.clone(), doc);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Documents ordered by slug.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentRef> {
        let mut docs: Vec<&DocumentRef> = self.by_id.values().collect();
        docs.sort_by(|a, b| a.slug.cmp(&b.slug));
        docs.into_iter()
    }
}

impl DocumentResolver for DocIndex {
    fn resolve_by_id(&self, id: &str) -> Option<DocumentRef> {
        self.by_id.get(id).cloned()
    }

    fn resolve_by_slug(&self, slug: &str) -> Option<DocumentRef> {
        if slug.is_empty() {
            return None;
        }
        let id = self.slug_to_id.get(&clean_slug(slug))?;
        self.by_id.get(id).cloned()
    }
}

impl FromIterator<DocumentRef> for DocIndex {
    fn from_iter<I: IntoIterator<Item = DocumentRef>>(iter: I) -> Self {
        let mut index = Self::new();
        for doc in iter {
            index.insert(doc);
        }
        index
    }
}
