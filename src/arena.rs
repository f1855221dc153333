//! Node storage for [`LinkedList`](crate::LinkedList).
//!
//! Nodes live in a vector of slots and link to each other by slot key. Vacant
//! slots form a free list and are reused by later insertions. Every node is
//! tagged with a stamp taken from a counter that never goes backwards, so a
//! key that has been freed and reused does not resolve for a stale handle.

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
    pub(crate) stamp: u64,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
    next_stamp: u64,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: None,
            len: 0,
            next_stamp: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores a node and returns its key and stamp.
    ///
    /// Nothing is modified if growing the slot vector panics.
    pub(crate) fn insert(&mut self, value: T, next: Option<usize>) -> (usize, u64) {
        let stamp = self.next_stamp;
        let node = Node { value, next, stamp };
        let key = match self.free {
            Some(key) => {
                let next_free = match self.slots[key] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.slots[key] = Slot::Occupied(node);
                self.free = next_free;
                key
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };
        self.next_stamp += 1;
        self.len += 1;
        (key, stamp)
    }

    pub(crate) fn remove(&mut self, key: usize) -> Option<Node<T>> {
        let slot = self.slots.get_mut(key)?;
        if let Slot::Vacant { .. } = slot {
            return None;
        }
        let old = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(key);
        self.len -= 1;
        match old {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, key: usize) -> Option<&Node<T>> {
        match self.slots.get(key)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, key: usize) -> Option<&mut Node<T>> {
        match self.slots.get_mut(key)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drops every node. The stamp counter keeps running.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// Raw view of the slots for [`IterMut`](crate::iter::IterMut), which hands
    /// out mutable references to distinct nodes one at a time.
    pub(crate) fn raw_slots(&mut self) -> RawSlots<T> {
        RawSlots {
            base: self.slots.as_mut_ptr(),
            len: self.slots.len(),
        }
    }
}

pub(crate) struct RawSlots<T> {
    base: *mut Slot<T>,
    len: usize,
}

impl<T> RawSlots<T> {
    /// # Safety
    ///
    /// The arena these slots came from must stay mutably borrowed for `'a`, and
    /// no other reference to the node at `key` may be alive during `'a`.
    pub(crate) unsafe fn node_mut<'a>(&self, key: usize) -> Option<&'a mut Node<T>> {
        if key >= self.len {
            return None;
        }
        match &mut *self.base.add(key) {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }
}
