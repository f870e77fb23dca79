use crate::parsing::inline::InlineNode;

use super::kinds::ListKind;

/// A structural event in a rendered list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    OpenList(ListKind),
    CloseList(ListKind),
    /// `level` is the item's indentation depth.
    OpenItem { level: usize },
    CloseItem,
    /// Parsed content of the item opened last.
    Content(Vec<InlineNode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    kind: ListKind,
    depth: usize,
}

/// Tracks open lists by indentation depth.
///
/// Each frame is an open list with one open item, and depth strictly
/// increases from the bottom of the stack to the top. Every event that
/// closes a list matches an earlier open, so after any call the number of
/// `CloseList` events emitted equals the `OpenList` count minus the stack
/// depth.
#[derive(Debug, Default)]
pub struct ListStack {
    frames: Vec<Frame>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Events needed before an item at `depth` of `kind` can be written.
    pub fn open_or_continue(&mut self, depth: usize, kind: ListKind) -> Vec<ListEvent> {
        let mut events = vec![];

        while let Some(top) = self.frames.last().copied() {
            if top.depth <= depth {
                break;
            }
            self.pop(&mut events);
        }

        match self.frames.last().copied() {
            Some(top) if top.depth == depth && top.kind == kind => {
                events.push(ListEvent::CloseItem);
            }
            Some(top) if top.depth == depth => {
                self.pop(&mut events);
                self.push(kind, depth, &mut events);
                events.push(ListEvent::OpenItem { level: depth });
                return events;
            }
            // Deeper than the top (or nothing open): nest a new list inside
            // the open item.
            _ => self.push(kind, depth, &mut events),
        }
        events.push(ListEvent::OpenItem { level: depth });
        events
    }

    /// Closes every open item and list, innermost first.
    pub fn close_all(&mut self) -> Vec<ListEvent> {
        let mut events = vec![];
        while !self.frames.is_empty() {
            self.pop(&mut events);
        }
        events
    }

    fn push(&mut self, kind: ListKind, depth: usize, events: &mut Vec<ListEvent>) {
        self.frames.push(Frame { kind, depth });
        events.push(ListEvent::OpenList(kind));
    }

    fn pop(&mut self, events: &mut Vec<ListEvent>) {
        if let Some(frame) = self.frames.pop() {
            events.push(ListEvent::CloseItem);
            events.push(ListEvent::CloseList(frame.kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ListEvent::*;
    use ListKind::*;

    fn balance(events: &[ListEvent]) -> (usize, usize) {
        let opens = events.iter().filter(|e| matches!(e, OpenList(_))).count();
        let closes = events.iter().filter(|e| matches!(e, CloseList(_))).count();
        (opens, closes)
    }

    #[test]
    fn first_item_opens_list() {
        let mut stack = ListStack::new();
        assert_eq!(
            stack.open_or_continue(1, Unordered),
            vec![OpenList(Unordered), OpenItem { level: 1 }]
        );
        assert_eq!(stack.frames.len(), 1);
    }

    #[test]
    fn same_depth_continues() {
        let mut stack = ListStack::new();
        stack.open_or_continue(1, Unordered);
        assert_eq!(
            stack.open_or_continue(1, Unordered),
            vec![CloseItem, OpenItem { level: 1 }]
        );
    }

    #[test]
    fn deeper_nests_inside_item() {
        let mut stack = ListStack::new();
        stack.open_or_continue(1, Unordered);
        assert_eq!(
            stack.open_or_continue(2, Ordered),
            vec![OpenList(Ordered), OpenItem { level: 2 }]
        );
        assert_eq!(
            stack.open_or_continue(1, Unordered),
            vec![
                CloseItem,
                CloseList(Ordered),
                CloseItem,
                OpenItem { level: 1 }
            ]
        );
    }

    #[test]
    fn kind_change_reopens() {
        let mut stack = ListStack::new();
        stack.open_or_continue(1, Unordered);
        assert_eq!(
            stack.open_or_continue(1, Ordered),
            vec![
                CloseItem,
                CloseList(Unordered),
                OpenList(Ordered),
                OpenItem { level: 1 }
            ]
        );
    }

    #[test]
    fn shallower_than_first_item_starts_over() {
        let mut stack = ListStack::new();
        stack.open_or_continue(2, Unordered);
        let events = stack.open_or_continue(1, Unordered);
        assert_eq!(
            events,
            vec![
                CloseItem,
                CloseList(Unordered),
                OpenList(Unordered),
                OpenItem { level: 1 }
            ]
        );
    }

    #[test]
    fn closes_track_opens_minus_depth() {
        let mut stack = ListStack::new();
        let mut all = vec![];
        for (depth, kind) in [(1, Unordered), (3, Ordered), (2, Unordered), (2, Ordered), (1, Unordered)] {
            all.extend(stack.open_or_continue(depth, kind));
            let (opens, closes) = balance(&all);
            assert_eq!(closes, opens - stack.frames.len());
        }
        all.extend(stack.close_all());
        let (opens, closes) = balance(&all);
        assert_eq!(opens, closes);
        assert!(stack.is_empty());
    }
}
