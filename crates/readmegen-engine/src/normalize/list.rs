use std::collections::HashMap;

use super::kinds::ListKind;

/// Mutable list-tracking state threaded through the main rewrite pass.
///
/// Holds the active indentation stack (strictly increasing, innermost last)
/// plus per-indentation ordered counters, list kinds, and ordered marker
/// widths. Blank lines keep the context alive so ordered numbering stays
/// sequential across them; a plain line that is not indented enough to be a
/// continuation of the innermost item drops the whole context.
#[derive(Debug, Default)]
pub struct ListContext {
    indent_stack: Vec<usize>,
    counters: HashMap<usize, u64>,
    kinds: HashMap<usize, ListKind>,
    marker_widths: HashMap<usize, usize>,
}

impl ListContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.indent_stack.clear();
        self.counters.clear();
        self.kinds.clear();
        self.marker_widths.clear();
    }

    pub fn has_active_list(&self) -> bool {
        !self.indent_stack.is_empty()
    }

    /// Stack maintenance for a list item at `indent`: inner levels shallower
    /// than it are popped, a deeper indent is pushed.
    pub fn enter_item(&mut self, indent: usize) {
        while self.indent_stack.last().is_some_and(|&top| indent < top) {
            self.indent_stack.pop();
        }
        if self.indent_stack.last().is_none_or(|&top| indent > top) {
            self.indent_stack.push(indent);
        }
    }

    /// A non-list, non-blank line. Keeps the context only when the line is
    /// indented far enough (marker width, at least two columns) to be a
    /// continuation of the innermost item.
    pub fn observe_plain(&mut self, indent: usize) {
        match self.indent_stack.last() {
            Some(&top) if indent >= top + 2 => {}
            _ => self.clear(),
        }
    }

    /// Bumps the ordered counter for an indentation bucket, resetting to 1
    /// when the bucket was not previously ordered.
    pub fn next_ordered(&mut self, indent: usize) -> u64 {
        let n = if self.kinds.get(&indent) != Some(&ListKind::Ordered) {
            1
        } else {
            self.counters.get(&indent).copied().unwrap_or(0) + 1
        };
        self.counters.insert(indent, n);
        self.kinds.insert(indent, ListKind::Ordered);
        n
    }

    /// Records the rendered marker width for an ordered bucket, measured on
    /// the source digits: `"1. "` is 3 columns, `"10. "` is 4.
    pub fn record_marker_width(&mut self, indent: usize, digits: usize) {
        self.marker_widths.insert(indent, digits + 2);
    }

    pub fn note_unordered(&mut self, indent: usize) {
        self.kinds.insert(indent, ListKind::Unordered);
        self.counters.remove(&indent);
        self.marker_widths.remove(&indent);
    }

    /// Nearest ordered ancestor on the stack with a tracked marker width,
    /// together with the nested indentation it requires of an unordered
    /// child (ancestor indent + marker width).
    pub fn ordered_ancestor_target(&self) -> Option<(usize, usize)> {
        for &anc in self.indent_stack.iter().rev() {
            if self.kinds.get(&anc) != Some(&ListKind::Ordered) {
                continue;
            }
            let Some(&width) = self.marker_widths.get(&anc) else {
                continue;
            };
            return Some((anc, anc + width));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_pushes_deeper_and_pops_shallower() {
        let mut ctx = ListContext::new();
        ctx.enter_item(0);
        ctx.enter_item(2);
        ctx.enter_item(4);
        assert!(ctx.has_active_list());
        // returning to an existing level pops the inner ones
        ctx.enter_item(2);
        ctx.enter_item(3);
        ctx.enter_item(0);
        assert!(ctx.has_active_list());
    }

    #[test]
    fn ordered_counter_resets_on_kind_change() {
        let mut ctx = ListContext::new();
        ctx.enter_item(0);
        assert_eq!(ctx.next_ordered(0), 1);
        assert_eq!(ctx.next_ordered(0), 2);
        ctx.note_unordered(0);
        assert_eq!(ctx.next_ordered(0), 1);
    }

    #[test]
    fn counters_are_per_indent_bucket() {
        let mut ctx = ListContext::new();
        assert_eq!(ctx.next_ordered(0), 1);
        assert_eq!(ctx.next_ordered(3), 1);
        assert_eq!(ctx.next_ordered(0), 2);
    }

    #[test]
    fn continuation_line_keeps_context() {
        let mut ctx = ListContext::new();
        ctx.enter_item(0);
        ctx.next_ordered(0);
        ctx.observe_plain(3);
        assert!(ctx.has_active_list());
        assert_eq!(ctx.next_ordered(0), 2);
    }

    #[test]
    fn shallow_plain_line_clears_context() {
        let mut ctx = ListContext::new();
        ctx.enter_item(0);
        ctx.next_ordered(0);
        ctx.observe_plain(0);
        assert!(!ctx.has_active_list());
        assert_eq!(ctx.next_ordered(0), 1);
    }

    #[test]
    fn ancestor_target_uses_marker_width() {
        let mut ctx = ListContext::new();
        ctx.enter_item(0);
        ctx.record_marker_width(0, 2); // "10."
        ctx.next_ordered(0);
        assert_eq!(ctx.ordered_ancestor_target(), Some((0, 4)));
    }

    #[test]
    fn no_ancestor_for_unordered_stack() {
        let mut ctx = ListContext::new();
        ctx.enter_item(0);
        ctx.note_unordered(0);
        assert_eq!(ctx.ordered_ancestor_target(), None);
    }
}
