//! Slicing a document down to the part an embed fragment names.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::kinds::Heading;
use crate::parsing::source::lines;

const ANCHOR: char = '^';

/// Folds a heading for comparison: lowercase, every run of characters other
/// than `a-z0-9` becomes one space, trimmed.
///
/// `"Setup: Step 1!"` and `"setup step 1"` compare equal.
pub fn normalize_heading(s: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let lower = s.to_lowercase();
    NON_ALNUM
        .get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("Invalid heading regex"))
        .replace_all(&lower, " ")
        .trim()
        .to_string()
}

/// Returns the part of `content` that `fragment` selects.
///
/// - `^anchor`: the first line containing `^anchor`, plus following lines up
///   to a blank line or heading.
/// - anything else: the heading whose normalised text matches, through to the
///   next heading of the same or a higher level.
///
/// An empty fragment, or one that matches nothing, selects the whole content.
/// An anchor that is not found is retried as a heading.
pub fn extract_section<'c>(content: &'c str, fragment: &str) -> Cow<'c, str> {
    let target = fragment.trim();
    if content.is_empty() || target.is_empty() {
        return Cow::Borrowed(content);
    }

    if let Some(section) = target
        .strip_prefix(ANCHOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .and_then(|block| anchor_section(content, block))
    {
        return Cow::Owned(section);
    }

    match heading_section(content, &normalize_heading(target)) {
        Some(section) => Cow::Owned(section),
        None => Cow::Borrowed(content),
    }
}

fn anchor_section(content: &str, block: &str) -> Option<String> {
    let marker = format!("{ANCHOR}{block}");
    let mut rest = lines(content).map(|l| l.text);
    let first = rest.find(|line| line.contains(&marker))?;

    let mut section = vec![first];
    section.extend(rest.take_while(|line| !line.trim().is_empty() && Heading::parse(line).is_none()));
    Some(section.join("\n"))
}

fn heading_section(content: &str, wanted: &str) -> Option<String> {
    if wanted.is_empty() {
        return None;
    }
    let mut rest = lines(content).map(|l| l.text);
    let (first, level) = rest.by_ref().find_map(|line| {
        let (level, text) = Heading::parse(line)?;
        (!text.is_empty() && normalize_heading(text) == wanted).then_some((line, level))
    })?;

    let mut section = vec![first];
    section.extend(rest.take_while(|line| {
        Heading::parse(line).is_none_or(|(next_level, _)| next_level > level)
    }));
    Some(section.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const DOC: &str = "# Guide\n\
                       intro ^intro\n\
                       more intro\n\
                       \n\
                       ## Setup: Linux!\n\
                       apt install\n\
                       ### Details\n\
                       deep\n\
                       ## Usage\n\
                       run it";

    #[rstest]
    #[case("Setup: Linux!", "setup linux")]
    #[case("  Über  Cool ", "ber cool")]
    #[case("---", "")]
    #[case("Step 1", "step 1")]
    fn heading_normalisation(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_heading(input), expected);
    }

    #[test]
    fn heading_fragment_includes_deeper_headings() {
        assert_eq!(
            extract_section(DOC, "setup linux"),
            "## Setup: Linux!\napt install\n### Details\ndeep"
        );
    }

    #[test]
    fn last_heading_runs_to_end() {
        assert_eq!(extract_section(DOC, "Usage"), "## Usage\nrun it");
    }

    #[test]
    fn top_heading_takes_everything() {
        assert_eq!(extract_section(DOC, "guide"), DOC);
    }

    #[test]
    fn anchor_fragment_stops_at_blank_line() {
        assert_eq!(extract_section(DOC, "^intro"), "intro ^intro\nmore intro");
    }

    #[test]
    fn anchor_stops_at_heading() {
        assert_eq!(extract_section("a ^x\n# H\nb", "^x"), "a ^x");
    }

    #[test]
    fn missing_anchor_falls_back_to_heading() {
        assert_eq!(extract_section("# Usage\nbody", "^usage"), "# Usage\nbody");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("no such heading")]
    #[case("^")]
    fn unmatched_fragments_select_everything(#[case] fragment: &str) {
        assert!(matches!(extract_section(DOC, fragment), Cow::Borrowed(s) if s == DOC));
    }

    #[test]
    fn crlf_content() {
        assert_eq!(extract_section("# A\r\nx\r\n# B", "a"), "# A\nx");
    }
}
