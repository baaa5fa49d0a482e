use regex::{Captures, Regex};

use super::types::Piece;
use crate::render::escape::escape_html;

/// Ordered inline output: raw text interleaved with generated markup.
///
/// Each pass rewrites only `Text` pieces, so markup emitted by one pass is
/// never rescanned by a later one ([`Pieces::apply_spanning`] may wrap it). Adjacent text is kept merged so a rejected
/// match does not split text a later pattern could still match.
#[derive(Debug, Default)]
pub struct Pieces(Vec<Piece>);

impl Pieces {
    pub fn from_text(text: &str) -> Self {
        let mut pieces = Self::default();
        pieces.push(Piece::Text(text.to_string()));
        pieces
    }

    /// Runs `re` over every text piece.
    ///
    /// `f` returns the replacement pieces for a match, or `None` to leave the
    /// matched text literal.
    pub fn apply<F>(&mut self, re: &Regex, mut f: F)
    where
        F: FnMut(&Captures<'_>) -> Option<Vec<Piece>>,
    {
        let mut out = Self(Vec::with_capacity(self.0.len()));

        for piece in std::mem::take(&mut self.0) {
            let text = match piece {
                Piece::Text(text) => text,
                markup => {
                    out.push(markup);
                    continue;
                }
            };

            let mut last = 0;
            for caps in re.captures_iter(&text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                out.push_text(&text[last..whole.start()]);
                match f(&caps) {
                    Some(replacement) => replacement.into_iter().for_each(|p| out.push(p)),
                    None => out.push_text(whole.as_str()),
                }
                last = whole.end();
            }
            out.push_text(&text[last..]);
        }

        *self = out;
    }

    /// Runs `re` over the whole line, with every markup piece standing in as
    /// one opaque character.
    ///
    /// Delimiters therefore always come from text, while the content between
    /// them may hold markup from earlier passes. `f` receives the pieces inside
    /// capture group 1 and returns the replacement for the whole match.
    pub fn apply_spanning<F>(&mut self, re: &Regex, mut f: F)
    where
        F: FnMut(Vec<Piece>) -> Vec<Piece>,
    {
        let flat = Flattened::new(std::mem::take(&mut self.0));
        let mut out = Self::default();

        let mut last = 0;
        for caps in re.captures_iter(&flat.text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.extend(flat.slice(last, whole.start()));
            out.extend(f(flat.slice(inner.start(), inner.end())));
            last = whole.end();
        }
        out.extend(flat.slice(last, flat.text.len()));

        *self = out;
    }

    /// Escapes the remaining text and concatenates everything.
    pub fn into_html(self) -> String {
        let mut html = String::new();
        for piece in self.0 {
            match piece {
                Piece::Text(text) => html.push_str(&escape_html(&text)),
                Piece::Markup(markup) => html.push_str(&markup),
            }
        }
        html
    }

    fn push(&mut self, piece: Piece) {
        if let Piece::Text(text) = &piece {
            if text.is_empty() {
                return;
            }
            if let Some(Piece::Text(prev)) = self.0.last_mut() {
                prev.push_str(text);
                return;
            }
        }
        self.0.push(piece);
    }

    fn push_text(&mut self, text: &str) {
        self.push(Piece::Text(text.to_string()));
    }

    fn extend(&mut self, pieces: impl IntoIterator<Item = Piece>) {
        pieces.into_iter().for_each(|p| self.push(p));
    }
}

/// Pieces laid out as one string, markup replaced by [`Flattened::OPAQUE`].
///
/// Piece boundaries are kept as byte offsets, so a literal `OPAQUE` in the
/// source text is still text.
struct Flattened {
    text: String,
    pieces: Vec<Piece>,
    starts: Vec<usize>,
}

impl Flattened {
    const OPAQUE: char = '\u{FFFC}';

    fn new(pieces: Vec<Piece>) -> Self {
        let mut text = String::new();
        let mut starts = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            starts.push(text.len());
            match piece {
                Piece::Text(t) => text.push_str(t),
                Piece::Markup(_) => text.push(Self::OPAQUE),
            }
        }
        Self {
            text,
            pieces,
            starts,
        }
    }

    /// Pieces covering `from..to`. Text is cut at the edges; markup is
    /// one character wide, so it is either wholly inside or outside.
    fn slice(&self, from: usize, to: usize) -> Vec<Piece> {
        let mut out = vec![];
        for (i, piece) in self.pieces.iter().enumerate() {
            let start = self.starts[i];
            let end = self.starts.get(i + 1).copied().unwrap_or(self.text.len());
            let (lo, hi) = (from.max(start), to.min(end));
            if lo >= hi {
                continue;
            }
            match piece {
                Piece::Text(t) => out.push(Piece::Text(t[lo - start..hi - start].to_string())),
                Piece::Markup(_) => out.push(piece.clone()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn digits() -> Regex {
        Regex::new(r"\d+").unwrap()
    }

    #[test]
    fn replaces_matches_and_escapes_text() {
        let mut pieces = Pieces::from_text("a<1>b");
        pieces.apply(&digits(), |c| Some(vec![Piece::markup(format!("<i>{}</i>", &c[0]))]));
        assert_eq!(pieces.into_html(), "a&lt;<i>1</i>&gt;b");
    }

    #[test]
    fn markup_is_not_rescanned() {
        let mut pieces = Pieces::from_text("7");
        pieces.apply(&digits(), |_| Some(vec![Piece::markup("<b>42</b>")]));
        pieces.apply(&digits(), |_| Some(vec![Piece::markup("X")]));
        assert_eq!(pieces.into_html(), "<b>42</b>");
    }

    #[test]
    fn rejected_match_stays_literal_and_merged() {
        let mut pieces = Pieces::from_text("x1y");
        pieces.apply(&digits(), |_| None);
        assert_eq!(pieces.0, vec![Piece::Text("x1y".into())]);
    }

    #[test]
    fn replacement_text_stays_scannable() {
        let mut pieces = Pieces::from_text("[12]");
        pieces.apply(&Regex::new(r"\[(.+)\]").unwrap(), |c| {
            Some(vec![
                Piece::markup("<s>"),
                Piece::Text(c[1].to_string()),
                Piece::markup("</s>"),
            ])
        });
        pieces.apply(&digits(), |c| Some(vec![Piece::markup(format!("#{}", &c[0]))]));
        assert_eq!(pieces.into_html(), "<s>#12</s>");
    }

    fn wrap_in(tag: &'static str) -> impl FnMut(Vec<Piece>) -> Vec<Piece> {
        move |inner| {
            let mut out = vec![Piece::markup(format!("<{tag}>"))];
            out.extend(inner);
            out.push(Piece::markup(format!("</{tag}>")));
            out
        }
    }

    fn stars() -> Regex {
        Regex::new(r"\*([^*]+)\*").unwrap()
    }

    #[test]
    fn spanning_match_wraps_markup() {
        let mut pieces = Pieces::from_text("*[1]* x");
        pieces.apply(&Regex::new(r"\[1\]").unwrap(), |_| Some(vec![Piece::markup("<a>1</a>")]));
        pieces.apply_spanning(&stars(), wrap_in("em"));
        assert_eq!(pieces.into_html(), "<em><a>1</a></em> x");
    }

    #[test]
    fn spanning_inner_text_stays_scannable() {
        let mut pieces = Pieces::from_text("*a 1 b* 2");
        pieces.apply_spanning(&stars(), wrap_in("em"));
        pieces.apply(&digits(), |c| Some(vec![Piece::markup(format!("#{}", &c[0]))]));
        assert_eq!(pieces.into_html(), "<em>a #1 b</em> #2");
    }

    #[test]
    fn spanning_never_looks_inside_markup() {
        let mut pieces = Pieces::from_text("x");
        pieces.apply(&Regex::new("x").unwrap(), |_| Some(vec![Piece::markup("*m*")]));
        pieces.apply_spanning(&stars(), wrap_in("em"));
        assert_eq!(pieces.into_html(), "*m*");
    }

    #[test]
    fn spanning_treats_literal_placeholder_char_as_text() {
        let mut pieces = Pieces::from_text("*\u{FFFC}<*");
        pieces.apply_spanning(&stars(), wrap_in("em"));
        assert_eq!(pieces.into_html(), "<em>\u{FFFC}&lt;</em>");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(Pieces::from_text("").into_html(), "");
    }
}
