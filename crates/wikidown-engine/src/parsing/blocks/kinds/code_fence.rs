/// Fenced code delimiter.
///
/// A fence is any line starting with three backticks; anything after them
/// (an info string, more backticks) is ignored. The same test opens and
/// closes a fence.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}
