use std::sync::OnceLock;

use regex::Regex;

/// Single-level emphasis: the captured text is never rescanned for more
/// emphasis, and no `*` may appear inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `**text**`
    Strong,
    /// `*text*`
    Em,
}

impl Emphasis {
    pub fn tag(self) -> &'static str {
        match self {
            Emphasis::Strong => "strong",
            Emphasis::Em => "em",
        }
    }

    pub fn pattern(self) -> &'static Regex {
        static STRONG: OnceLock<Regex> = OnceLock::new();
        static EM: OnceLock<Regex> = OnceLock::new();
        match self {
            Emphasis::Strong => STRONG
                .get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid strong regex")),
            Emphasis::Em => {
                EM.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("Invalid emphasis regex"))
            }
        }
    }
}
