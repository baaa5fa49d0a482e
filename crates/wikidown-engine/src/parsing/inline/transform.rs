use super::{
    kinds::{Autolink, EmbedMode, EmbedTarget, Emphasis, Image, Link, TargetRef, WikiLink},
    parser::split_code_spans,
    pieces::Pieces,
    types::{Piece, Segment},
};
use crate::render::escape::{escape_html, safe_url};
use crate::resolver::DocumentResolver;
use crate::slug::encode_component;

/// Renders one line, heading, list item, table cell or quote line to HTML.
///
/// Code spans are taken out first and only escaped. The rest goes through
/// the passes in fixed order: block embed, inline embed, image, link,
/// wiki-link, strong, emphasis, autolink. Leftover text is escaped once at
/// the end.
pub fn render_inline(raw: &str, resolver: &dyn DocumentResolver) -> String {
    let mut html = String::with_capacity(raw.len());
    for segment in split_code_spans(raw) {
        match segment {
            Segment::Code(code) => {
                html.push_str("<code>");
                html.push_str(&escape_html(code));
                html.push_str("</code>");
            }
            Segment::Text(text) => html.push_str(&transform_text(text, resolver)),
        }
    }
    html
}

fn transform_text(text: &str, resolver: &dyn DocumentResolver) -> String {
    let mut pieces = Pieces::from_text(text);

    for mode in [EmbedMode::Block, EmbedMode::Inline] {
        pieces.apply(mode.pattern(), |c| {
            let target = EmbedTarget::parse(&c[1], resolver)?;
            Some(vec![Piece::Markup(embed_placeholder(&target, mode))])
        });
    }

    pieces.apply(Image::pattern(), |c| {
        Some(vec![Piece::Markup(format!(
            r#"<img src="{}" alt="{}" />"#,
            safe_url(&c[2]),
            escape_html(&c[1])
        ))])
    });

    pieces.apply(Link::pattern(), |c| {
        Some(vec![Piece::Markup(format!(
            r#"<a href="{}">{}</a>"#,
            safe_url(&c[2]),
            escape_html(&c[1])
        ))])
    });

    pieces.apply(WikiLink::pattern(), |c| {
        wiki_link(&c[1], resolver).map(|html| vec![Piece::Markup(html)])
    });

    for emphasis in [Emphasis::Strong, Emphasis::Em] {
        let tag = emphasis.tag();
        pieces.apply_spanning(emphasis.pattern(), |inner| {
            let mut wrapped = vec![Piece::markup(format!("<{tag}>"))];
            wrapped.extend(inner);
            wrapped.push(Piece::markup(format!("</{tag}>")));
            wrapped
        });
    }

    pieces.apply(Autolink::pattern(), |c| {
        let (url, trailing) = Autolink::split_trailing(&c[0]);
        Some(vec![
            Piece::Markup(format!(
                r#"<a href="{}">{}</a>"#,
                safe_url(url),
                escape_html(url)
            )),
            Piece::Text(trailing.to_string()),
        ])
    });

    pieces.into_html()
}

/// `<a class="wiki-link ...">` for the inside of `[[...]]`, or `None` when
/// there is no target.
fn wiki_link(inner: &str, resolver: &dyn DocumentResolver) -> Option<String> {
    let (target, alias) = WikiLink::split(inner);
    if target.is_empty() {
        return None;
    }

    let target_ref = TargetRef::parse(target);
    let doc = target_ref.resolve(resolver);
    if doc.is_none() {
        log::debug!("unresolved wiki-link {target:?}");
    }

    let slug = match target_ref {
        TargetRef::Id(_) => doc.as_ref().map(|d| d.slug.clone()).unwrap_or_default(),
        TargetRef::Slug(slug) => slug,
    };
    let label = alias
        .or_else(|| doc.as_ref().and_then(|d| d.display_label()))
        .unwrap_or(target);

    let (encoded, href_prefix) = if slug.is_empty() {
        (encode_component(target), "#wiki-")
    } else {
        (encode_component(&slug), "#doc-")
    };

    let mut html = String::from(r#"<a class="wiki-link"#);
    if doc.is_some() {
        html.push_str(" wiki-link-resolved");
    }
    html.push_str(&format!(r#"" data-wiki-slug="{encoded}""#));
    if let Some(doc) = doc.as_ref().filter(|d| !d.id.is_empty()) {
        html.push_str(&format!(r#" data-doc-id="{}""#, escape_html(&doc.id)));
    }
    html.push_str(&format!(
        r#" href="{href_prefix}{encoded}">{}</a>"#,
        escape_html(label)
    ));
    Some(html)
}

/// Placeholder span that a later fill-in step replaces with content.
fn embed_placeholder(target: &EmbedTarget, mode: EmbedMode) -> String {
    if !target.resolved {
        log::debug!("unresolved embed {:?}", target.title);
    }

    let mut attrs = vec![];
    if !target.slug.is_empty() {
        attrs.push(format!(
            r#"data-embed-slug="{}""#,
            encode_component(&target.slug)
        ));
    }
    if !target.fragment.is_empty() {
        attrs.push(format!(
            r#"data-embed-fragment="{}""#,
            escape_html(&target.fragment)
        ));
    }
    if !target.doc_id.is_empty() {
        attrs.push(format!(r#"data-doc-id="{}""#, escape_html(&target.doc_id)));
    }
    attrs.push(format!(r#"data-embed-mode="{}""#, mode.as_str()));

    format!(
        r#"<span class="md-embed" {} title="Embed {}"><span class="md-embed-label">{}</span><span class="md-embed-hint">{}</span></span>"#,
        attrs.join(" "),
        escape_html(target.tooltip()),
        escape_html(target.label()),
        mode.hint()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentRef;
    use crate::resolver::{DocIndex, NoDocuments};
    use pretty_assertions::assert_eq;

    fn index() -> DocIndex {
        [DocumentRef::new("d1", "team/handbook", "Handbook")]
            .into_iter()
            .collect()
    }

    fn plain(raw: &str) -> String {
        render_inline(raw, &NoDocuments)
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(plain("<b>x</b> & y"), "&lt;b&gt;x&lt;/b&gt; &amp; y");
    }

    #[test]
    fn code_spans_are_raw() {
        assert_eq!(
            plain("`**a** [[b]]` **c**"),
            "<code>**a** [[b]]</code> <strong>c</strong>"
        );
        assert_eq!(plain("`<br>`"), "<code>&lt;br&gt;</code>");
    }

    #[test]
    fn resolved_wiki_link() {
        assert_eq!(
            render_inline("[[team/handbook]]", &index()),
            r##"<a class="wiki-link wiki-link-resolved" data-wiki-slug="team%2Fhandbook" data-doc-id="d1" href="#doc-team%2Fhandbook">Handbook</a>"##
        );
    }

    #[test]
    fn wiki_link_alias_wins() {
        let html = render_inline("[[doc:d1|the guide]]", &index());
        assert!(html.contains(">the guide</a>"));
        assert!(html.contains(r##"href="#doc-team%2Fhandbook""##));
    }

    #[test]
    fn unresolved_wiki_link() {
        assert_eq!(
            plain("[[missing/page]]"),
            r##"<a class="wiki-link" data-wiki-slug="missing%2Fpage" href="#doc-missing%2Fpage">missing/page</a>"##
        );
    }

    #[test]
    fn unresolved_doc_id_uses_wiki_anchor() {
        assert_eq!(
            plain("[[doc:nope]]"),
            r##"<a class="wiki-link" data-wiki-slug="doc%3Anope" href="#wiki-doc%3Anope">doc:nope</a>"##
        );
    }

    #[test]
    fn blank_wiki_target_stays_literal() {
        assert_eq!(plain("[[ |x]]"), "[[ |x]]");
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            plain("![a<b](p.png) [site](https://x.io)"),
            r#"<img src="p.png" alt="a&lt;b" /> <a href="https://x.io">site</a>"#
        );
    }

    #[test]
    fn javascript_urls_are_blocked() {
        assert_eq!(plain("[x](javascript:alert(1))"), r##"<a href="#">x</a>)"##);
        assert_eq!(
            plain("![x]( JavaScript:alert(1))"),
            r##"<img src="#" alt="x" />)"##
        );
    }

    #[test]
    fn emphasis_does_not_touch_link_labels() {
        assert_eq!(
            plain("[*a*](u) *b*"),
            r#"<a href="u">*a*</a> <em>b</em>"#
        );
    }

    #[test]
    fn triple_stars_are_bold_inside_em() {
        assert_eq!(plain("***x***"), "<em><strong>x</strong></em>");
    }

    #[test]
    fn bold_around_link() {
        assert_eq!(
            plain("**[x](u)**"),
            r#"<strong><a href="u">x</a></strong>"#
        );
    }

    #[test]
    fn em_around_wiki_link() {
        assert_eq!(
            render_inline("*[[team/handbook]]*", &index()),
            r##"<em><a class="wiki-link wiki-link-resolved" data-wiki-slug="team%2Fhandbook" data-doc-id="d1" href="#doc-team%2Fhandbook">Handbook</a></em>"##
        );
    }

    #[test]
    fn em_wraps_bold() {
        assert_eq!(plain("*a **b** c*"), "<em>a <strong>b</strong> c</em>");
    }

    #[test]
    fn stars_around_neighbouring_links_pair_with_their_own_link() {
        assert_eq!(
            render_inline("**[x](u)** and *[[team/handbook]]*", &index()),
            concat!(
                r#"<strong><a href="u">x</a></strong> and <em>"#,
                r##"<a class="wiki-link wiki-link-resolved" data-wiki-slug="team%2Fhandbook" data-doc-id="d1" href="#doc-team%2Fhandbook">Handbook</a></em>"##
            )
        );
    }

    #[test]
    fn bold_around_embed_placeholder() {
        let html = plain("**{{embed:notes/x}}**");
        assert!(html.starts_with(r#"<strong><span class="md-embed""#));
        assert!(html.ends_with("</span></span></strong>"));
    }

    #[test]
    fn unpaired_star_next_to_link_stays_literal() {
        assert_eq!(plain("*[x](u) y"), r#"*<a href="u">x</a> y"#);
    }

    #[test]
    fn autolink_trims_punctuation() {
        assert_eq!(
            plain("see https://example.com/a."),
            r#"see <a href="https://example.com/a">https://example.com/a</a>."#
        );
    }

    #[test]
    fn autolink_inside_bold() {
        assert_eq!(
            plain("**http://a.io**"),
            r#"<strong><a href="http://a.io">http://a.io</a></strong>"#
        );
    }

    #[test]
    fn link_url_is_not_autolinked_again() {
        assert_eq!(
            plain("[home](https://a.io)"),
            r#"<a href="https://a.io">home</a>"#
        );
    }

    #[test]
    fn block_embed_placeholder() {
        assert_eq!(
            render_inline("![[team/handbook#Setup Steps]]", &index()),
            concat!(
                r#"<span class="md-embed" data-embed-slug="team%2Fhandbook" data-embed-fragment="Setup Steps" data-doc-id="d1" data-embed-mode="block" title="Embed Handbook">"#,
                r#"<span class="md-embed-label">Handbook</span><span class="md-embed-hint">Embedded page preview</span></span>"#
            )
        );
    }

    #[test]
    fn inline_embed_placeholder_unresolved() {
        assert_eq!(
            plain("{{embed:notes/x|Notes}}"),
            concat!(
                r#"<span class="md-embed" data-embed-slug="notes%2Fx" data-embed-mode="inline" title="Embed notes/x">"#,
                r#"<span class="md-embed-label">Notes</span><span class="md-embed-hint">Embedded view</span></span>"#
            )
        );
    }

    #[test]
    fn embed_is_not_also_an_image_or_wiki_link() {
        let html = plain("![[a]]");
        assert!(html.starts_with(r#"<span class="md-embed""#));
        assert!(!html.contains("wiki-link"));
    }

    #[test]
    fn empty_line() {
        assert_eq!(plain(""), "");
    }
}
