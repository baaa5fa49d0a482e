use std::sync::OnceLock;

use regex::Regex;

/// `![alt](url)`; alt may be empty.
pub struct Image;

impl Image {
    pub fn pattern() -> &'static Regex {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        IMAGE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image regex"))
    }
}

/// `[label](url)`; label must be non-empty.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK: OnceLock<Regex> = OnceLock::new();
        LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
    }
}
