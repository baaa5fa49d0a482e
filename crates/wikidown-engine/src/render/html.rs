use crate::parsing::blocks::BlockEvent;
use crate::parsing::inline::render_inline;
use crate::resolver::DocumentResolver;

use super::escape::escape_html;

/// Writes [`BlockEvent`]s as an HTML fragment.
///
/// Produces:
/// - `<pre class="md-code"><code>` for code, escaped, one `\n` per line
/// - `<table class="md-table">` with `<thead>` and, when rows exist, `<tbody>`
/// - `<blockquote>` holding one `<p>` per quoted line
/// - `<div class="md-gap"></div>` for blank lines
///
/// Text in headings, paragraphs, list items, cells and quote lines goes
/// through the inline transformer.
pub struct HtmlWriter<'r> {
    out: String,
    resolver: &'r dyn DocumentResolver,
}

impl<'r> HtmlWriter<'r> {
    pub fn new(resolver: &'r dyn DocumentResolver) -> Self {
        Self {
            out: String::new(),
            resolver,
        }
    }

    pub fn write(&mut self, event: &BlockEvent<'_>) {
        match event {
            BlockEvent::Heading { level, text } => {
                let inline = self.inline(text);
                self.out.push_str(&format!("<h{level}>{inline}</h{level}>"));
            }
            BlockEvent::Paragraph(text) => self.paragraph(text),
            BlockEvent::Code(lines) => {
                self.out.push_str(r#"<pre class="md-code"><code>"#);
                for line in lines {
                    self.out.push_str(&escape_html(line));
                    self.out.push('\n');
                }
                self.out.push_str("</code></pre>");
            }
            BlockEvent::ListStart(kind) => self.out.push_str(&format!("<{}>", kind.tag())),
            BlockEvent::ListItem(text) => {
                let inline = self.inline(text);
                self.out.push_str(&format!("<li>{inline}</li>"));
            }
            BlockEvent::ListEnd(kind) => self.out.push_str(&format!("</{}>", kind.tag())),
            BlockEvent::Table { header, rows } => self.table(header, rows),
            BlockEvent::BlockQuote(lines) => {
                self.out.push_str("<blockquote>");
                for line in lines {
                    self.paragraph(line);
                }
                self.out.push_str("</blockquote>");
            }
            BlockEvent::ThematicBreak => self.out.push_str("<hr/>"),
            BlockEvent::Gap => self.out.push_str(r#"<div class="md-gap"></div>"#),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn inline(&self, text: &str) -> String {
        render_inline(text, self.resolver)
    }

    fn paragraph(&mut self, text: &str) {
        let inline = self.inline(text);
        self.out.push_str(&format!("<p>{inline}</p>"));
    }

    fn table(&mut self, header: &[&str], rows: &[Vec<&str>]) {
        self.out.push_str(r#"<table class="md-table"><thead><tr>"#);
        for cell in header {
            let inline = self.inline(cell);
            self.out.push_str(&format!("<th>{inline}</th>"));
        }
        self.out.push_str("</tr></thead>");

        if !rows.is_empty() {
            self.out.push_str("<tbody>");
            for row in rows {
                self.out.push_str("<tr>");
                for cell in row {
                    let inline = self.inline(cell);
                    self.out.push_str(&format!("<td>{inline}</td>"));
                }
                self.out.push_str("</tr>");
            }
            self.out.push_str("</tbody>");
        }
        self.out.push_str("</table>");
    }
}
