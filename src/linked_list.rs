use log::{debug, trace};

use crate::arena::Arena;
use crate::error::{ListError, Result};
use crate::iter::{Iter, IterMut};
use crate::position::{ListId, NodeRef, Position};

/// A singly linked list.
///
/// The list owns a chain of nodes headed by a value-less sentinel. Besides the
/// usual front operations it supports inserting and erasing right after any
/// [`Position`], where [`before_begin`](LinkedList::before_begin) names the
/// sentinel so the first element can be handled like any other.
pub struct LinkedList<T> {
    // names the sentinel; stays with this list object
    pub(crate) id: ListId,
    // names the current node chain; moves with the nodes on swap
    pub(crate) chain: ListId,
    pub(crate) head: Option<usize>,
    pub(crate) nodes: Arena<T>,
    pub(crate) size: usize,
}

/// Owner of the link a new node is spliced into.
#[derive(Clone, Copy)]
enum Anchor {
    Sentinel,
    Node(usize),
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList {
            id: ListId::fresh(),
            chain: ListId::fresh(),
            head: None,
            nodes: Arena::new(),
            size: 0,
        }
    }

    /// Identity of this list's sentinel. It never changes, not even across
    /// [`swap`](LinkedList::swap) or `clone_from`.
    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push_front(&mut self, value: T) {
        self.splice(Anchor::Sentinel, value);
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(Anchor::Sentinel).map(|(value, _)| value)
    }

    pub fn front(&self) -> Option<&T> {
        let node = self.nodes.get(self.head?)?;
        Some(&node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let node = self.nodes.get_mut(self.head?)?;
        Some(&mut node.value)
    }

    /// Drops every element. Positions taken before the call become stale.
    pub fn clear(&mut self) {
        debug!("clearing {} elements", self.size);
        self.release();
    }

    fn release(&mut self) {
        self.head = None;
        self.nodes.clear();
        self.size = 0;
    }

    /// The sentinel position preceding the first element.
    pub fn before_begin(&self) -> Position {
        Position::BeforeBegin(self.id)
    }

    /// Position of the first element, or [`Position::End`] if the list is empty.
    pub fn begin(&self) -> Position {
        self.position_of(self.head)
    }

    pub fn end(&self) -> Position {
        Position::End
    }

    /// Whether `pos` may currently be used with this list.
    pub fn contains_position(&self, pos: Position) -> bool {
        pos.is_end() || self.anchor(pos).is_ok()
    }

    /// Moves `pos` one step forward: the sentinel advances to [`begin`],
    /// the last element to [`Position::End`].
    ///
    /// [`begin`]: LinkedList::begin
    pub fn advance(&self, pos: Position) -> Result<Position> {
        let anchor = self.anchor(pos)?;
        Ok(self.position_of(self.next_of(anchor)))
    }

    pub fn get(&self, pos: Position) -> Result<&T> {
        let key = self.element(pos)?;
        match self.nodes.get(key) {
            Some(node) => Ok(&node.value),
            None => Err(ListError::StalePosition),
        }
    }

    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T> {
        let key = self.element(pos)?;
        match self.nodes.get_mut(key) {
            Some(node) => Ok(&mut node.value),
            None => Err(ListError::StalePosition),
        }
    }

    /// Inserts `value` right after `pos` and returns the new element's position.
    ///
    /// `pos` must be the sentinel or a live element of this list. On error the
    /// list is left untouched and `value` is dropped.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Result<Position> {
        let anchor = self.anchor(pos)?;
        Ok(Position::Node(self.splice(anchor, value)))
    }

    /// Drops the element right after `pos` and returns the position of the
    /// element that now follows `pos`.
    pub fn erase_after(&mut self, pos: Position) -> Result<Position> {
        let (_, next) = self.unlink_after(pos)?;
        Ok(self.position_of(next))
    }

    /// Removes the element right after `pos` and returns it.
    pub fn remove_after(&mut self, pos: Position) -> Result<T> {
        let (value, _) = self.unlink_after(pos)?;
        Ok(value)
    }

    /// Exchanges the contents of two lists without touching their elements.
    ///
    /// Element positions move with the elements: a position to an element of
    /// `self` taken before the swap is valid for `other` afterwards. Each
    /// list keeps its own before-begin position.
    pub fn swap(&mut self, other: &mut LinkedList<T>) {
        debug!(
            "swapping lists of {} and {} elements",
            self.size, other.size
        );
        std::mem::swap(&mut self.chain, &mut other.chain);
        std::mem::swap(&mut self.head, &mut other.head);
        std::mem::swap(&mut self.nodes, &mut other.nodes);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.size)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Iterates from the element at `pos` to the end. The sentinel starts at
    /// the first element; [`Position::End`] yields nothing.
    ///
    /// Starting from an element walks the rest of the chain once to count it.
    pub fn iter_from(&self, pos: Position) -> Result<Iter<'_, T>> {
        let (cursor, remaining) = match pos {
            Position::End => (None, 0),
            Position::BeforeBegin(_) => {
                self.anchor(pos)?;
                (self.head, self.size)
            }
            Position::Node(node) => {
                let key = self.resolve(node)?;
                (Some(key), self.count_from(key))
            }
        };
        Ok(Iter::new(&self.nodes, cursor, remaining))
    }

    fn count_from(&self, key: usize) -> usize {
        let mut count = 0;
        let mut cursor = Some(key);
        while let Some(key) = cursor {
            count += 1;
            cursor = self.nodes.get(key).and_then(|node| node.next);
        }
        count
    }

    /// Appends `values` after the last element, walking the chain once.
    pub(crate) fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut tail = Anchor::Sentinel;
        while let Some(key) = self.next_of(tail) {
            tail = Anchor::Node(key);
        }
        for value in values {
            tail = Anchor::Node(self.splice(tail, value).key);
        }
    }

    fn splice(&mut self, anchor: Anchor, value: T) -> NodeRef {
        let (key, stamp) = self.nodes.insert(value, self.next_of(anchor));
        self.set_next(anchor, Some(key));
        self.size += 1;
        debug_assert_eq!(self.nodes.len(), self.size);
        NodeRef {
            list: self.chain,
            key,
            stamp,
        }
    }

    fn unlink_after(&mut self, pos: Position) -> Result<(T, Option<usize>)> {
        let anchor = self.anchor(pos)?;
        self.unlink(anchor).ok_or(ListError::NothingToErase)
    }

    fn unlink(&mut self, anchor: Anchor) -> Option<(T, Option<usize>)> {
        let key = self.next_of(anchor)?;
        let node = self.nodes.remove(key)?;
        self.set_next(anchor, node.next);
        self.size -= 1;
        debug_assert_eq!(self.nodes.len(), self.size);
        Some((node.value, node.next))
    }

    fn next_of(&self, anchor: Anchor) -> Option<usize> {
        match anchor {
            Anchor::Sentinel => self.head,
            Anchor::Node(key) => self.nodes.get(key)?.next,
        }
    }

    fn set_next(&mut self, anchor: Anchor, next: Option<usize>) {
        match anchor {
            Anchor::Sentinel => self.head = next,
            Anchor::Node(key) => {
                if let Some(node) = self.nodes.get_mut(key) {
                    node.next = next;
                }
            }
        }
    }

    fn position_of(&self, key: Option<usize>) -> Position {
        let Some(key) = key else {
            return Position::End;
        };
        match self.nodes.get(key) {
            Some(node) => Position::Node(NodeRef {
                list: self.chain,
                key,
                stamp: node.stamp,
            }),
            None => Position::End,
        }
    }

    /// Resolves a position that may own a link: the sentinel or a live node.
    fn anchor(&self, pos: Position) -> Result<Anchor> {
        match pos {
            Position::End => Err(ListError::EndPosition),
            Position::BeforeBegin(list) => {
                self.check_sentinel(list)?;
                Ok(Anchor::Sentinel)
            }
            Position::Node(node) => self.resolve(node).map(Anchor::Node),
        }
    }

    /// Resolves a position that must name an element.
    fn element(&self, pos: Position) -> Result<usize> {
        match pos {
            Position::End => Err(ListError::EndPosition),
            Position::BeforeBegin(list) => {
                self.check_sentinel(list)?;
                Err(ListError::BeforeBeginDeref)
            }
            Position::Node(node) => self.resolve(node),
        }
    }

    fn resolve(&self, node: NodeRef) -> Result<usize> {
        if node.list != self.chain {
            trace!("rejecting position from chain {:?} in {:?}", node.list, self.chain);
            return Err(ListError::ForeignPosition);
        }
        match self.nodes.get(node.key) {
            Some(found) if found.stamp == node.stamp => Ok(node.key),
            _ => {
                trace!("rejecting stale position {:?}", node);
                Err(ListError::StalePosition)
            }
        }
    }

    fn check_sentinel(&self, list: ListId) -> Result<()> {
        if list == self.id {
            Ok(())
        } else {
            trace!("rejecting sentinel of {:?} in {:?}", list, self.id);
            Err(ListError::ForeignPosition)
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Exchanges the contents of `lhs` and `rhs`, see [`LinkedList::swap`].
pub fn swap<T>(lhs: &mut LinkedList<T>, rhs: &mut LinkedList<T>) {
    lhs.swap(rhs);
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<T> LinkedList<T> {
        fn assert_invariants(&self) {
            let mut reachable = 0;
            let mut cursor = self.head;
            while let Some(key) = cursor {
                reachable += 1;
                assert!(reachable <= self.nodes.len(), "cycle in chain");
                cursor = self.nodes.get(key).expect("dangling link").next;
            }
            assert_eq!(reachable, self.size);
            assert_eq!(self.nodes.len(), self.size);
        }
    }

    #[test]
    fn new_list_is_empty() {
        let list: LinkedList<u32> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.begin(), list.end());
        assert_eq!(list.front(), None);
        list.assert_invariants();
    }

    #[test]
    fn push_and_pop_keep_count() {
        let mut list = LinkedList::new();
        for i in 1..12 {
            list.push_front(i);
            list.assert_invariants();
        }
        assert_eq!(list.len(), 11);
        assert_eq!(list.pop_front(), Some(11));
        assert_eq!(list.front(), Some(&10));
        list.assert_invariants();
        while list.pop_front().is_some() {
            list.assert_invariants();
        }
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn front_mut_changes_first() {
        let mut list = LinkedList::from([1, 2]);
        *list.front_mut().unwrap() = 7;
        assert_eq!(list, LinkedList::from([7, 2]));
    }

    #[test]
    fn splicing_keeps_invariants() {
        let mut list = LinkedList::from([1, 2, 3, 4]);
        let first = list.begin();
        let inserted = list.insert_after(first, 9).unwrap();
        list.assert_invariants();
        list.erase_after(inserted).unwrap();
        list.assert_invariants();
        list.erase_after(list.before_begin()).unwrap();
        list.assert_invariants();
        assert_eq!(list, LinkedList::from([9, 3, 4]));
    }

    #[test]
    fn clear_resets_and_reuses_storage() {
        let mut list = LinkedList::from([1, 2, 3]);
        let old_begin = list.begin();
        list.clear();
        list.assert_invariants();
        assert!(list.is_empty());
        list.clear();
        list.push_front(5);
        list.assert_invariants();
        assert_eq!(list.get(old_begin), Err(ListError::StalePosition));
        assert_eq!(list.get(list.begin()), Ok(&5));
    }

    #[test]
    fn reused_slot_does_not_revive_position() {
        let mut list = LinkedList::from([1, 2]);
        let second = list.advance(list.begin()).unwrap();
        list.erase_after(list.begin()).unwrap();
        list.push_front(3);

        let stale = node_ref(second);
        let revived = node_ref(list.begin());
        assert_eq!(revived.key, stale.key);
        assert_ne!(revived.stamp, stale.stamp);
        assert_eq!(list.get(second), Err(ListError::StalePosition));
        assert!(!list.contains_position(second));
        list.assert_invariants();
    }

    fn node_ref(pos: Position) -> NodeRef {
        match pos {
            Position::Node(node) => node,
            other => panic!("not a node position: {:?}", other),
        }
    }

    #[test]
    fn append_all_extends_at_tail() {
        let mut list = LinkedList::from([1]);
        list.append_all(vec![2, 3]);
        list.assert_invariants();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn swap_moves_element_positions_with_nodes() {
        let mut a = LinkedList::from([1, 2, 3]);
        let mut b = LinkedList::from([4, 5]);
        let a_begin = a.begin();
        swap(&mut a, &mut b);
        assert_eq!(b.get(a_begin), Ok(&1));
        assert_eq!(a.get(a_begin), Err(ListError::ForeignPosition));
        a.assert_invariants();
        b.assert_invariants();
    }

    #[test]
    fn swap_leaves_sentinels_in_place() {
        let mut a = LinkedList::from([1, 2, 3]);
        let mut b = LinkedList::from([4, 5]);
        let (a_id, b_id) = (a.id(), b.id());
        let a_sentinel = a.before_begin();
        a.swap(&mut b);
        assert_eq!((a.id(), b.id()), (a_id, b_id));
        assert_eq!(a.before_begin(), a_sentinel);

        assert_eq!(a.insert_after(a_sentinel, 0).map(|_| ()), Ok(()));
        assert_eq!(a, LinkedList::from([0, 4, 5]));
        assert_eq!(b.insert_after(a_sentinel, 9), Err(ListError::ForeignPosition));
        assert_eq!(b, LinkedList::from([1, 2, 3]));
        a.assert_invariants();
        b.assert_invariants();
    }

    #[test]
    fn clear_keeps_sentinel() {
        let mut list = LinkedList::from([1]);
        let sentinel = list.before_begin();
        list.clear();
        list.insert_after(sentinel, 2).unwrap();
        assert_eq!(list.front(), Some(&2));
    }

    #[test]
    fn failed_calls_leave_list_unchanged() {
        let mut list = LinkedList::from([1, 2]);
        let last = list.advance(list.begin()).unwrap();
        assert_eq!(list.erase_after(last), Err(ListError::NothingToErase));
        assert_eq!(list.insert_after(Position::End, 3), Err(ListError::EndPosition));
        list.assert_invariants();
        assert_eq!(list, LinkedList::from([1, 2]));
    }
}
