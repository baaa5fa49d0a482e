use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::{EmbedError, EmbedSource, EmbeddedDocument, section::extract_section};
use crate::render::{escape_html, render};
use crate::resolver::DocumentResolver;
use crate::slug::decode_slug;

/// Nesting depth used by [`fill_embeds`] callers that have no preference.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Fills every embed placeholder in `html`, following nested embeds up to
/// `max_depth` levels.
pub fn fill_embeds(
    html: &str,
    source: &dyn EmbedSource,
    resolver: &dyn DocumentResolver,
    max_depth: usize,
) -> String {
    EmbedFiller::new(source, resolver)
        .max_depth(max_depth)
        .fill(html)
}

/// Replaces `md-embed` placeholders with rendered content.
///
/// Each document is fetched at most once per filler. A placeholder whose
/// document is already being embedded further up the chain becomes an error
/// panel instead of recursing.
pub struct EmbedFiller<'a> {
    source: &'a dyn EmbedSource,
    resolver: &'a dyn DocumentResolver,
    max_depth: usize,
    origin: Option<String>,
    fetched: HashMap<String, Result<EmbeddedDocument, String>>,
}

impl<'a> EmbedFiller<'a> {
    pub fn new(source: &'a dyn EmbedSource, resolver: &'a dyn DocumentResolver) -> Self {
        Self {
            source,
            resolver,
            max_depth: DEFAULT_MAX_DEPTH,
            origin: None,
            fetched: HashMap::new(),
        }
    }

    /// Levels of embeds to fill. `0` leaves every placeholder as it is.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Slug of the document `html` was rendered from, so that it counts as
    /// part of the embed chain.
    pub fn origin(mut self, slug: impl Into<String>) -> Self {
        self.origin = Some(slug.into());
        self
    }

    pub fn fill(&mut self, html: &str) -> String {
        let mut chain: Vec<String> = self.origin.iter().cloned().collect();
        self.fill_level(html, &mut chain, 0)
    }

    fn fill_level(&mut self, html: &str, chain: &mut Vec<String>, depth: usize) -> String {
        if depth >= self.max_depth {
            if placeholder_pattern().is_match(html) {
                log::debug!("embed depth limit {} reached", self.max_depth);
            }
            return html.to_string();
        }

        let mut out = String::with_capacity(html.len());
        let mut last = 0;

        for caps in placeholder_pattern().captures_iter(html) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&html[last..whole.start()]);
            last = whole.end();

            let attrs = &caps[1];
            let Some(slug) = attribute(attrs, "data-embed-slug")
                .map(|v| decode_slug(v).into_owned())
                .filter(|s| !s.is_empty())
            else {
                out.push_str(whole.as_str());
                continue;
            };
            let fragment = attribute(attrs, "data-embed-fragment")
                .map(|v| html_escape::decode_html_entities(v).into_owned())
                .unwrap_or_default();

            match self.panel(&slug, &fragment, chain, depth) {
                Ok(panel) => out.push_str(&format!(
                    r#"<span class="md-embed md-embed--loaded" {attrs}>{panel}</span>"#
                )),
                Err(message) => {
                    log::debug!("embed {slug:?} failed: {message}");
                    out.push_str(&format!(
                        r#"<span class="md-embed md-embed--error" {attrs}><span class="md-embed-error">{}</span></span>"#,
                        escape_html(&message)
                    ));
                }
            }
        }

        out.push_str(&html[last..]);
        out
    }

    fn panel(
        &mut self,
        slug: &str,
        fragment: &str,
        chain: &mut Vec<String>,
        depth: usize,
    ) -> Result<String, String> {
        if chain.iter().any(|s| s == slug) {
            return Err(EmbedError::Cycle(slug.to_string()).to_string());
        }

        let doc = self.fetch(slug)?;
        let section = extract_section(&doc.content, fragment);
        let body: &str = if section.is_empty() { " " } else { &section };

        let title = [doc.title.as_str(), doc.slug.as_str(), slug]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(slug);

        chain.push(slug.to_string());
        let rendered = render(body, self.resolver);
        let rendered = self.fill_level(&rendered, chain, depth + 1);
        chain.pop();

        Ok(format!(
            r#"<div class="md-embed-panel"><div class="md-embed-panel-title">{}</div><div class="md-embed-panel-body">{rendered}</div></div>"#,
            escape_html(title)
        ))
    }

    fn fetch(&mut self, slug: &str) -> Result<EmbeddedDocument, String> {
        let source = self.source;
        self.fetched
            .entry(slug.to_string())
            .or_insert_with(|| source.fetch(slug).map_err(|e| e.to_string()))
            .clone()
    }
}

/// Placeholder as written by the inline transformer, with its attributes in
/// group 1.
fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(
            r#"<span class="md-embed" ([^>]*)><span class="md-embed-label">[^<]*</span><span class="md-embed-hint">[^<]*</span></span>"#,
        )
        .expect("Invalid embed placeholder regex")
    })
}

fn attribute<'h>(attrs: &'h str, name: &str) -> Option<&'h str> {
    static ATTRIBUTE: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE
        .get_or_init(|| Regex::new(r#"([a-z-]+)="([^"]*)""#).expect("Invalid attribute regex"))
        .captures_iter(attrs)
        .find(|c| &c[1] == name)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}
