/// Code span: a raw zone delimited by single backticks.
///
/// Nothing inside a code span is interpreted; its content is only escaped.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
