//! Slug normalisation and percent-encoding helpers shared by the renderer,
//! the document index and link extraction.

use std::borrow::Cow;

const MD_SUFFIX: &str = ".md";

/// Cleans a slug the way the host application stores them: trimmed, one
/// trailing `.md` removed, backslashes turned into forward slashes.
pub fn clean_slug(slug: &str) -> String {
    let trimmed = slug.trim();
    trimmed
        .strip_suffix(MD_SUFFIX)
        .unwrap_or(trimmed)
        .replace('\\', "/")
}

/// Percent-decodes a slug, returning it unchanged when it does not decode to UTF-8.
pub fn decode_slug(slug: &str) -> Cow<'_, str> {
    match urlencoding::decode(slug) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(slug),
    }
}

/// Normalises a wiki-link or embed target into a slug.
///
/// Decodes percent-encoding, trims, strips enclosing slashes and a trailing
/// `.md` (any case), and turns backslashes into forward slashes.
pub fn normalize_wiki_slug(raw: &str) -> String {
    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("could not decode wiki target {raw:?}: {e}");
            Cow::Borrowed(raw)
        }
    };

    let slug = decoded.trim().trim_matches('/');
    let slug = strip_md_suffix(slug);
    slug.replace('\\', "/")
}

/// Percent-encodes a value for use in a URL fragment or `data-` attribute.
pub fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

fn strip_md_suffix(slug: &str) -> &str {
    let cut = slug.len().saturating_sub(MD_SUFFIX.len());
    match slug.get(cut..) {
        Some(tail) if tail.eq_ignore_ascii_case(MD_SUFFIX) => &slug[..cut],
        _ => slug,
    }
}
