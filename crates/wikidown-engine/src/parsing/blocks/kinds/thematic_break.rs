use std::sync::OnceLock;

use regex::Regex;

/// Thematic break: three or more of the same `*`, `-` or `_`, optionally
/// separated and surrounded by whitespace.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn matches(line: &str) -> bool {
        static BREAK: OnceLock<Regex> = OnceLock::new();
        BREAK
            .get_or_init(|| {
                Regex::new(r"^\s*(?:(?:\*\s*){3,}|(?:-\s*){3,}|(?:_\s*){3,})$")
                    .expect("Invalid thematic break regex")
            })
            .is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("___", true)]
    #[case("-----", true)]
    #[case("  * * *  ", true)]
    #[case("- - -", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("- item", false)]
    #[case("--- text", false)]
    #[case("", false)]
    fn thematic_break_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}
