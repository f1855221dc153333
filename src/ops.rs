use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;

use crate::LinkedList;

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds the copy on the side and swaps it in, so `self` is untouched if
    /// cloning any element panics. Positions into the old contents of `self`
    /// stop resolving; its before-begin position stays valid.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        debug!(
            "replacing {} elements with a copy of {}",
            self.len(),
            replacement.len()
        );
        self.swap(&mut replacement);
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
        }
        for value in values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = LinkedList::new();
        list.append_all(values);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::LinkedList;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn display_separates_with_spaces() {
        let list = LinkedList::from([3, 14, 15]);
        assert_eq!(list.to_string(), "3 14 15");
        assert_eq!(LinkedList::<u8>::new().to_string(), "");
    }

    #[test]
    fn debug_uses_list_notation() {
        let list = LinkedList::from(["a", "b"]);
        assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);
    }

    #[test]
    fn equal_lists_hash_equal() {
        let a = LinkedList::from([1, 2, 3]);
        let b: LinkedList<i32> = vec![1, 2, 3].into();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn partial_order_with_nan() {
        let a = LinkedList::from([1.0, f64::NAN]);
        let b = LinkedList::from([1.0, 2.0]);
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, a.clone());
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = LinkedList::from([7, 8]);
        let mut target = LinkedList::from([1, 2, 3]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_ne!(target.id(), source.id());
    }

    #[test]
    fn clone_from_keeps_sentinel_and_drops_old_positions() {
        let source = LinkedList::from([7, 8]);
        let mut target = LinkedList::from([1, 2, 3]);
        let sentinel = target.before_begin();
        let old_first = target.begin();
        target.clone_from(&source);

        assert_eq!(target.before_begin(), sentinel);
        target.insert_after(sentinel, 0).unwrap();
        assert_eq!(target, LinkedList::from([0, 7, 8]));
        assert!(!target.contains_position(old_first));
        assert!(!source.contains_position(sentinel));
    }
}
