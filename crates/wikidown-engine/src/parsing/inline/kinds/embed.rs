use std::sync::OnceLock;

use regex::Regex;

use super::wikilink::{TargetRef, WikiLink};
use crate::resolver::DocumentResolver;

/// How an embed was written, which decides the placeholder's hint text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedMode {
    /// `![[target]]`
    Block,
    /// `{{embed:target}}`
    Inline,
}

impl EmbedMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EmbedMode::Block => "block",
            EmbedMode::Inline => "inline",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            EmbedMode::Block => "Embedded page preview",
            EmbedMode::Inline => "Embedded view",
        }
    }

    pub fn pattern(self) -> &'static Regex {
        static BLOCK: OnceLock<Regex> = OnceLock::new();
        static INLINE: OnceLock<Regex> = OnceLock::new();
        match self {
            EmbedMode::Block => BLOCK
                .get_or_init(|| Regex::new(r"!\[\[([^\]]+)\]\]").expect("Invalid embed regex")),
            EmbedMode::Inline => INLINE
                .get_or_init(|| Regex::new(r"\{\{embed:([^}]+)\}\}").expect("Invalid embed regex")),
        }
    }
}

/// Parsed embed reference: `[doc:<id> | path:<slug> | <slug>][#fragment][|alias]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbedTarget {
    /// Normalised slug, or the resolved document's slug for `doc:` targets.
    pub slug: String,
    /// Heading title or `^anchor` after `#`.
    pub fragment: String,
    pub alias: String,
    /// The `doc:` id as written, or the id of the document a slug resolved to.
    pub doc_id: String,
    /// Resolved title, else resolved slug, else slug, else the raw target.
    pub title: String,
    pub resolved: bool,
}

impl EmbedTarget {
    pub const FRAGMENT: char = '#';
    const FALLBACK_LABEL: &'static str = "Embed";

    /// Parses and resolves an embed reference. `None` when there is no target.
    pub fn parse(raw: &str, resolver: &dyn DocumentResolver) -> Option<Self> {
        let (target_part, alias) = WikiLink::split(raw.trim());
        if target_part.is_empty() {
            return None;
        }

        let (target, fragment) = match target_part.split_once(Self::FRAGMENT) {
            Some((target, fragment)) => (target.trim(), fragment.trim()),
            None => (target_part, ""),
        };

        let target_ref = TargetRef::parse(target);
        let doc = target_ref.resolve(resolver);
        let (slug, doc_id) = match target_ref {
            TargetRef::Id(id) => (
                doc.as_ref().map(|d| d.slug.clone()).unwrap_or_default(),
                id.to_string(),
            ),
            TargetRef::Slug(slug) => (
                slug,
                doc.as_ref().map(|d| d.id.clone()).unwrap_or_default(),
            ),
        };

        let title = doc
            .as_ref()
            .and_then(|d| d.display_label())
            .unwrap_or(if slug.is_empty() { target } else { &slug })
            .to_string();

        Some(Self {
            slug,
            fragment: fragment.to_string(),
            alias: alias.unwrap_or_default().to_string(),
            doc_id,
            title,
            resolved: doc.is_some(),
        })
    }

    /// Visible label: alias, else title.
    pub fn label(&self) -> &str {
        [self.alias.as_str(), self.title.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(Self::FALLBACK_LABEL)
    }

    /// Text for the placeholder's `title` attribute.
    pub fn tooltip(&self) -> &str {
        if self.title.is_empty() {
            self.label()
        } else {
            &self.title
        }
    }
}
