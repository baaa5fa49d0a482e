use std::sync::OnceLock;

use regex::Regex;

use crate::models::DocumentRef;
use crate::resolver::DocumentResolver;
use crate::slug::normalize_wiki_slug;

/// Wiki-link syntax: `[[target]]` or `[[target|alias]]`.
///
/// The target may be `doc:<id>`, `path:<slug>` or a bare slug. Prefixes are
/// matched case-insensitively.
pub struct WikiLink;

impl WikiLink {
    pub const ALIAS: char = '|';
    pub const DOC_PREFIX: &'static str = "doc:";
    pub const PATH_PREFIX: &'static str = "path:";

    /// `[[inner]]` with no `]` inside.
    pub fn pattern() -> &'static Regex {
        static WIKI_LINK: OnceLock<Regex> = OnceLock::new();
        WIKI_LINK.get_or_init(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("Invalid wiki-link regex"))
    }

    /// Splits `inner` into a trimmed target and an optional non-empty alias.
    ///
    /// Only the first two `|`-separated parts count; anything after a second
    /// `|` is ignored.
    pub fn split(inner: &str) -> (&str, Option<&str>) {
        let mut parts = inner.split(Self::ALIAS);
        let target = parts.next().unwrap_or_default().trim();
        let alias = parts.next().map(str::trim).filter(|a| !a.is_empty());
        (target, alias)
    }
}

/// What a wiki target refers to after prefix handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef<'a> {
    /// `doc:<id>`, id trimmed.
    Id(&'a str),
    /// `path:<slug>` or a bare slug, normalised.
    Slug(String),
}

impl<'a> TargetRef<'a> {
    pub fn parse(target: &'a str) -> Self {
        if let Some(id) = strip_prefix_ignore_case(target, WikiLink::DOC_PREFIX) {
            return TargetRef::Id(id.trim());
        }
        let candidate = strip_prefix_ignore_case(target, WikiLink::PATH_PREFIX).unwrap_or(target);
        TargetRef::Slug(normalize_wiki_slug(candidate))
    }

    /// Looks the target up; empty ids and slugs never reach the resolver.
    pub fn resolve(&self, resolver: &dyn DocumentResolver) -> Option<DocumentRef> {
        match self {
            TargetRef::Id(id) if !id.is_empty() => resolver.resolve_by_id(id),
            TargetRef::Slug(slug) if !slug.is_empty() => resolver.resolve_by_slug(slug),
            _ => None,
        }
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
