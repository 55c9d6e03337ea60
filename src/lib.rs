//! This crate provides a queue of strings backed by a doubly-linked list with
//! owned nodes, implemented as a cyclic list, together with in-place
//! algorithms over that list.
//!
//! The generic [`List`] allows inserting, removing elements at any given
//! position in constant time, and moving whole runs of nodes between lists
//! without copying. The [`Queue`] facade fixes the payload to an owned string.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::{Queue, QueueError};
//!
//! let mut queue = Queue::new();
//! for value in ["gnu", "bear", "dolphin", "bear"] {
//!     queue.insert_tail(value)?;
//! }
//! assert_eq!(queue.size(), 4);
//!
//! queue.sort(false);
//! assert_eq!(queue.head(), Some("bear"));
//!
//! assert_eq!(queue.delete_dup(), 2); // both "bear"s are gone
//! let removed = queue.remove_tail().unwrap();
//! assert_eq!(removed.value(), "gnu");
//! assert_eq!(queue.size(), 1);
//! # Ok::<(), QueueError>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Link    │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        └───────────┘
//! │  ║ payload T ║           ║ payload T ║                            ↑   ↑
//! │  ╚═══════════╝           ╚═══════════╝                            │   │
//! │      Node 0                  Node 1                               │   │
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains only a pointer `ghost` to the ghost node. The length is
//! not stored; [`List::len`] counts the nodes.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T`.
//!
//! The two pointers form a link header at the start of every node. The ghost
//! node is a bare link header without payload, so it costs no `T`.
//!
//! Initially, the `next` and `prev` pointers of the ghost node point to itself.
//! As elements are inserted into the list, `ghost.next` points to the first
//! element, and `ghost.prev` points to the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//!
//! ```
//! use cyclic_queue::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] sit on a node of the list, the
//! ghost node included, and can move forward or backward over it. In a list with
//! length *n*, there are *n* + 1 valid locations for the cursor.
//!
//! [`CursorMut`] mutates the list at its position:
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list into a new one, from the cursor position to the end;
//! - [`splice`]: splice another list before the cursor position.
//!
//! ```
//! use cyclic_queue::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! # Algorithms
//!
//! Every algorithm rewires links in place; no element is copied or moved in
//! memory.
//!
//! - sorting with [`List::sort_with`], choosing one of the [`SortKind`]s and an
//!   [`Order`];
//! - [`List::remove_middle`], [`List::remove_duplicates`];
//! - [`List::swap_pairs`], [`List::reverse`], [`List::reverse_k`];
//! - [`List::retain_ascending`], [`List::retain_descending`];
//! - [`List::shuffle`];
//! - [`merge_queues`], which splices a chain of queues into the first one.
//!
//! ```
//! use cyclic_queue::{List, Order, SortKind};
//!
//! let mut list = List::from_iter([3, 1, 4, 1, 5, 9, 2, 6]);
//! list.sort_with(SortKind::MergeBottomUp, Order::Descending);
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![9, 6, 5, 4, 3, 2, 1, 1]);
//!
//! list.reverse_k(3);
//! assert_eq!(Vec::from_iter(list), vec![5, 6, 9, 2, 3, 4, 1, 1]);
//! ```
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice

#[doc(inline)]
pub use error::QueueError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{List, Order, SortKind};
#[doc(inline)]
pub use queue::{merge_queues, Element, Queue, QueueContext};

pub mod list;
pub mod queue;

mod error;
