//! A singly linked list with positions.
//!
//! [`LinkedList`] keeps its elements in a forward chain headed by a sentinel.
//! Elements are added and removed at the front, or right after any
//! [`Position`] in the chain, including the before-begin position. Positions
//! are checked on every use, so a stale or foreign position is reported as a
//! [`ListError`] instead of touching freed storage.
//!
//! ```
//! use single_linked_list::LinkedList;
//!
//! let mut list = LinkedList::from([1, 2, 4]);
//! let second = list.advance(list.begin())?;
//! list.insert_after(second, 3)?;
//! assert_eq!(list, LinkedList::from([1, 2, 3, 4]));
//! # Ok::<(), single_linked_list::ListError>(())
//! ```

mod arena;
pub mod error;
pub mod iter;
pub mod linked_list;
mod ops;
pub mod position;

pub use error::{ListError, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use linked_list::{swap, LinkedList};
pub use position::{ListId, NodeRef, Position};
