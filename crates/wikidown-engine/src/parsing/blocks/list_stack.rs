use super::{kinds::ListKind, types::BlockEvent};

/// An open list: its kind and nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    pub kind: ListKind,
    pub level: usize,
}

/// Stack of open lists.
///
/// # Invariants
///
/// - Entry `i` always has `level == i`, so no two entries share a level and
///   no level is skipped.
/// - Every push emits a [`BlockEvent::ListStart`] and every pop a matching
///   [`BlockEvent::ListEnd`].
#[derive(Debug, Default, Clone)]
pub struct ListStack(Vec<ListContext>);

impl ListStack {
    /// Makes the stack ready for an item of `kind` at `level`.
    ///
    /// Deeper lists are closed, missing levels are opened one at a time with
    /// the item's kind, and a list of the other kind at the item's own level
    /// is replaced by a fresh list of `kind`.
    pub fn enter(&mut self, kind: ListKind, level: usize, out: &mut Vec<BlockEvent<'_>>) {
        while self.0.len() > level + 1 {
            self.pop(out);
        }
        while self.0.len() < level + 1 {
            self.push(kind, out);
        }
        if self.0.last().is_some_and(|top| top.kind != kind) {
            self.pop(out);
            self.push(kind, out);
        }
    }

    /// Closes every open list, innermost first.
    pub fn close_all(&mut self, out: &mut Vec<BlockEvent<'_>>) {
        while !self.0.is_empty() {
            self.pop(out);
        }
    }

    fn push(&mut self, kind: ListKind, out: &mut Vec<BlockEvent<'_>>) {
        let level = self.0.len();
        self.0.push(ListContext { kind, level });
        out.push(BlockEvent::ListStart(kind));
    }

    fn pop(&mut self, out: &mut Vec<BlockEvent<'_>>) {
        if let Some(ctx) = self.0.pop() {
            out.push(BlockEvent::ListEnd(ctx.kind));
        }
    }
}
