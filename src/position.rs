use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a list's sentinel or of its node chain.
///
/// A list holds two: one for its sentinel, which never changes, and one for
/// its chain, which `swap` moves along with the nodes so element positions
/// keep following the nodes they name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    pub(crate) fn fresh() -> ListId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to one node of one list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) list: ListId,
    pub(crate) key: usize,
    pub(crate) stamp: u64,
}

/// A place in a list's chain, used to anchor insertion, removal and iteration.
///
/// Positions do not borrow the list they came from. Every list operation that
/// takes one checks it first and returns an error if it is stale, belongs to
/// another list, or cannot be used for that operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// The sentinel before the first element. Holds no value.
    BeforeBegin(ListId),
    /// A live element.
    Node(NodeRef),
    /// Past the last element. All end positions compare equal.
    End,
}

impl Position {
    pub fn is_before_begin(&self) -> bool {
        matches!(self, Position::BeforeBegin(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Position::End)
    }

    /// The sentinel or chain this position was issued against, if any.
    pub fn list(&self) -> Option<ListId> {
        match self {
            Position::BeforeBegin(list) => Some(*list),
            Position::Node(node) => Some(node.list),
            Position::End => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_differ() {
        let a = ListId::fresh();
        let b = ListId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn sentinels_of_different_lists_differ() {
        let a = Position::BeforeBegin(ListId::fresh());
        let b = Position::BeforeBegin(ListId::fresh());
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert!(a.is_before_begin());
        assert!(!a.is_end());
    }

    #[test]
    fn ends_are_all_equal() {
        assert_eq!(Position::End, Position::End);
        assert!(Position::End.is_end());
        assert_eq!(Position::End.list(), None);
    }

    #[test]
    fn node_positions_compare_by_identity() {
        let list = ListId::fresh();
        let a = Position::Node(NodeRef { list, key: 0, stamp: 0 });
        let reused = Position::Node(NodeRef { list, key: 0, stamp: 1 });
        assert_ne!(a, reused);
        assert_eq!(a.list(), Some(list));
    }
}
