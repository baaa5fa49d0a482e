//! # Outgoing Links
//!
//! Finds the documents a page points at through `[[wiki-links]]` (and the
//! `![[embeds]]` that share their syntax), for backlink indexing.
//!
//! Extraction works on the raw text: links inside code are counted too.

use std::collections::BTreeSet;

use crate::parsing::inline::kinds::{TargetRef, WikiLink};
use crate::resolver::DocumentResolver;

/// One outgoing reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLink {
    /// `[[doc:<id>]]`
    Id(String),
    /// `[[path:<slug>]]` or `[[<slug>]]`, normalised.
    Slug(String),
}

/// Lists every wiki-link target in `text`, in order, skipping empty ones.
pub fn extract_doc_links(text: &str) -> Vec<DocLink> {
    WikiLink::pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let (target, _alias) = WikiLink::split(&caps[1]);
            if target.is_empty() {
                return None;
            }
            match TargetRef::parse(target) {
                TargetRef::Id(id) if !id.is_empty() => Some(DocLink::Id(id.to_string())),
                TargetRef::Slug(slug) if !slug.is_empty() => Some(DocLink::Slug(slug)),
                _ => None,
            }
        })
        .collect()
}

/// Ids of the documents `links` point at, sorted and de-duplicated.
///
/// Ids are taken as written; slugs count only when the resolver knows them.
/// `skip_id` (usually the linking document itself) is left out.
pub fn resolve_linked_ids(
    links: &[DocLink],
    resolver: &dyn DocumentResolver,
    skip_id: Option<&str>,
) -> Vec<String> {
    let ids: BTreeSet<String> = links
        .iter()
        .filter_map(|link| match link {
            DocLink::Id(id) => Some(id.clone()),
            DocLink::Slug(slug) => resolver.resolve_by_slug(slug).map(|doc| doc.id),
        })
        .filter(|id| !id.is_empty() && Some(id.as_str()) != skip_id)
        .collect();
    ids.into_iter().collect()
}
