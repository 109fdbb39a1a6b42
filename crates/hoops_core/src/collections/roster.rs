//! Ordered roster container
//!
//! A doubly linked list stored in an arena of nodes addressed by index, bounded
//! by two sentinel slots. Ends are O(1); removal by predicate is O(n).
//! Every structural change bumps a modification counter so that a detached
//! [`Cursor`] can detect changes made behind its back.

use crate::error::{LeagueError, Result};

const HEAD: usize = 0;
const TAIL: usize = 1;

#[derive(Debug, Clone)]
struct Node<T> {
    item: Option<T>,
    prev: usize,
    next: usize,
}

#[derive(Debug, Clone)]
pub struct Roster<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
    mod_count: u64,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Roster<T> {
    pub fn new() -> Self {
        let head = Node { item: None, prev: HEAD, next: TAIL };
        let tail = Node { item: None, prev: HEAD, next: TAIL };
        Self { nodes: vec![head, tail], free: Vec::new(), len: 0, mod_count: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn add_first(&mut self, item: T) {
        let succ = self.nodes[HEAD].next;
        self.link_before(item, succ);
    }

    pub fn add_last(&mut self, item: T) {
        self.link_before(item, TAIL);
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.nodes[self.nodes[HEAD].next].item.as_ref()
    }

    pub fn peek_last(&self) -> Option<&T> {
        self.nodes[self.nodes[TAIL].prev].item.as_ref()
    }

    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.nodes[HEAD].next;
        Some(self.unlink(first))
    }

    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.nodes[TAIL].prev;
        Some(self.unlink(last))
    }

    /// Removes the first element matching `predicate`; survivors keep their order.
    pub fn remove_first_occurrence<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut idx = self.nodes[HEAD].next;
        while idx != TAIL {
            let matched = self.nodes[idx].item.as_ref().is_some_and(&mut predicate);
            if matched {
                return Some(self.unlink(idx));
            }
            idx = self.nodes[idx].next;
        }
        None
    }

    pub fn contains<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { roster: self, idx: self.nodes[HEAD].next, remaining: self.len }
    }

    /// Fail-fast cursor that does not hold a borrow between steps.
    pub fn cursor(&self) -> Cursor {
        Cursor { next: self.nodes[HEAD].next, last_returned: None, expected: self.mod_count }
    }

    fn link_before(&mut self, item: T, succ: usize) {
        let pred = self.nodes[succ].prev;
        let node = Node { item: Some(item), prev: pred, next: succ };
        let idx = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[pred].next = idx;
        self.nodes[succ].prev = idx;
        self.len += 1;
        self.mod_count += 1;
    }

    fn unlink(&mut self, idx: usize) -> T {
        let pred = self.nodes[idx].prev;
        let succ = self.nodes[idx].next;
        self.nodes[pred].next = succ;
        self.nodes[succ].prev = pred;

        let node = &mut self.nodes[idx];
        let item = node.item.take();
        node.prev = idx;
        node.next = idx;
        self.free.push(idx);
        self.len -= 1;
        self.mod_count += 1;

        match item {
            Some(item) => item,
            // Sentinels are never unlinked and live nodes always carry an item.
            None => unreachable!("unlinked an empty roster slot"),
        }
    }
}

impl<T> FromIterator<T> for Roster<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for item in iter {
            roster.add_last(item);
        }
        roster
    }
}

impl<'a, T> IntoIterator for &'a Roster<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing front-to-back iterator. The borrow checker rules out
/// modification while it is alive.
pub struct Iter<'a, T> {
    roster: &'a Roster<T>,
    idx: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx == TAIL {
            return None;
        }
        let roster = self.roster;
        let node = &roster.nodes[self.idx];
        self.idx = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Position in a roster that survives between borrows.
///
/// Any structural change not made through this cursor makes the next call
/// fail with [`LeagueError::ConcurrentModification`].
#[derive(Debug, Clone)]
pub struct Cursor {
    next: usize,
    last_returned: Option<usize>,
    expected: u64,
}

impl Cursor {
    fn check<T>(&self, roster: &Roster<T>) -> Result<()> {
        if roster.mod_count != self.expected {
            return Err(LeagueError::ConcurrentModification);
        }
        Ok(())
    }

    pub fn has_next<T>(&self, roster: &Roster<T>) -> Result<bool> {
        self.check(roster)?;
        Ok(self.next != TAIL)
    }

    pub fn next<'a, T>(&mut self, roster: &'a Roster<T>) -> Result<Option<&'a T>> {
        self.check(roster)?;
        if self.next == TAIL {
            return Ok(None);
        }
        let idx = self.next;
        self.last_returned = Some(idx);
        self.next = roster.nodes[idx].next;
        Ok(roster.nodes[idx].item.as_ref())
    }

    /// Removes the element last returned by [`Cursor::next`].
    pub fn remove_current<T>(&mut self, roster: &mut Roster<T>) -> Result<Option<T>> {
        self.check(roster)?;
        let Some(idx) = self.last_returned.take() else {
            return Ok(None);
        };
        let item = roster.unlink(idx);
        self.expected = roster.mod_count;
        Ok(Some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(roster: &Roster<i32>) -> Vec<i32> {
        roster.iter().copied().collect()
    }

    #[test]
    fn test_deque_operations() {
        let mut roster = Roster::new();
        roster.add_last(1);
        roster.add_last(2);
        roster.add_first(0);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.remove_first(), Some(0));
        assert_eq!(roster.remove_last(), Some(2));
        assert_eq!(roster.remove_first(), Some(1));
        assert!(roster.is_empty());
        assert_eq!(roster.remove_first(), None);
        assert_eq!(roster.remove_last(), None);
    }

    #[test]
    fn test_peek() {
        let mut roster: Roster<i32> = Roster::new();
        assert_eq!(roster.peek_first(), None);
        roster.add_last(4);
        roster.add_last(5);
        assert_eq!(roster.peek_first(), Some(&4));
        assert_eq!(roster.peek_last(), Some(&5));
    }

    #[test]
    fn test_remove_first_occurrence_preserves_order() {
        let mut roster: Roster<i32> = [1, 2, 3, 2, 4].into_iter().collect();
        assert_eq!(roster.remove_first_occurrence(|x| *x == 2), Some(2));
        assert_eq!(collect(&roster), vec![1, 3, 2, 4]);
        assert_eq!(roster.remove_first_occurrence(|x| *x == 9), None);
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_contains_and_find() {
        let roster: Roster<i32> = [3, 6, 9].into_iter().collect();
        assert!(roster.contains(|x| *x == 6));
        assert!(!roster.contains(|x| *x == 7));
        assert_eq!(roster.find(|x| *x > 4), Some(&6));
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut roster = Roster::new();
        for i in 0..10 {
            roster.add_last(i);
        }
        for _ in 0..10 {
            roster.remove_first();
        }
        for i in 0..10 {
            roster.add_first(i);
        }
        // 2 sentinels + 10 live slots
        assert_eq!(roster.nodes.len(), 12);
        assert_eq!(collect(&roster), vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_iter_exact_size() {
        let roster: Roster<i32> = (0..7).collect();
        let mut iter = roster.iter();
        assert_eq!(iter.len(), 7);
        iter.next();
        assert_eq!(iter.len(), 6);
    }

    #[test]
    fn test_cursor_detects_modification() {
        let mut roster: Roster<i32> = [1, 2, 3].into_iter().collect();
        let mut cursor = roster.cursor();
        assert_eq!(cursor.next(&roster), Ok(Some(&1)));

        roster.add_last(4);
        assert_eq!(cursor.next(&roster), Err(LeagueError::ConcurrentModification));
        assert_eq!(cursor.has_next(&roster), Err(LeagueError::ConcurrentModification));
    }

    #[test]
    fn test_cursor_remove_current_stays_valid() {
        let mut roster: Roster<i32> = [1, 2, 3, 4].into_iter().collect();
        let mut cursor = roster.cursor();
        while let Some(value) = cursor.next(&roster).unwrap().copied() {
            if value % 2 == 0 {
                assert_eq!(cursor.remove_current(&mut roster), Ok(Some(value)));
            }
        }
        assert_eq!(collect(&roster), vec![1, 3]);
        assert_eq!(cursor.remove_current(&mut roster), Ok(None));
    }
}
