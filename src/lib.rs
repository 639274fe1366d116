//! This crate provides a doubly-linked list with owned nodes and
//! bidirectional, position-aware cursors.
//!
//! All positional reads and insertions on the [`List`] go through a cursor
//! obtained from it. Creating a cursor at an arbitrary position takes
//! *O*(*n*) time; every cursor operation afterwards takes *O*(1) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_mut(0).unwrap();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.next_index(), 1);
//!
//! assert_eq!(cursor.next(), Ok(&1)); // read forward over 1
//! assert_eq!(cursor.remove(), Ok(1)); // remove the element just read
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 2, 3, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!        ╔═══════════╗           ╔═══════════╗           ╔═══════════╗
//!        ║   next    ║ ────────→ ║   next    ║ ────────→ ║   next    ║ ───→ ∅
//!        ╟───────────╢           ╟───────────╢           ╟───────────╢
//! ∅ ←─── ║   prev    ║ ←──────── ║   prev    ║ ←──────── ║   prev    ║
//!        ╟───────────╢           ╟───────────╢           ╟───────────╢
//!        ║ element T ║           ║ element T ║           ║ element T ║
//!        ╚═══════════╝           ╚═══════════╝           ╚═══════════╝
//!            Node 0                  Node 1                  Node 2
//!              ↑                                               ↑
//!              │        ╔═══════════╦═══════════╦═══════╗      │
//!              └─────── ║   head    ║   tail    ║ (len) ║ ─────┘
//!                       ╚═══════════╩═══════════╩═══════╝
//!                                      List
//! ```
//! The `List` contains:
//! - a pointer `head` to the first node, absent when the list is empty;
//! - a pointer `tail` to the last node, for *O*(1) end access;
//! - a length field `len`.
//!
//! Each node of the list `List<T>` is allocated on the heap and contains:
//! - the `next` pointer that points to the next element, absent in the
//!   last node;
//! - the `prev` pointer that points to the previous element, absent in the
//!   first node;
//! - the actual payload `T`.
//!
//! The boundary links are absent (`None`), never dangling: for any
//! adjacent pair of nodes, the forward link of the left one and the
//! backward link of the right one name each other.
//!
//! In convention, in a list with length *n*, the elements are indexed by
//! 0, 1, ..., *n* - 1, and a cursor position ranges over 0, 1, ..., *n*,
//! where *n* is the end position behind the last element.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended iterators and iterate the list like an array
//! (fused and bounded). [`IterMut`] provides mutability of the elements
//! (but not of the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can read forward or
//! backward over the list. In a list with length *n*, there are *n* + 1
//! valid positions for a cursor, indexed by 0, 1, ..., *n*, where *n* is
//! the end position.
//!
//! A cursor sits between elements: a forward read with [`next`] returns
//! the element behind the cursor and steps over it, a backward read with
//! [`previous`] returns the element ahead of the cursor and steps back
//! over it. [`has_next`] and [`has_previous`] report whether such a read
//! would succeed, and [`next_index`]/[`previous_index`] report the
//! positions involved.
//!
//! ## Examples
//!
//! ```
//! use cursor_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor(3).unwrap(); // at the end
//! assert!(!cursor.has_next());
//! assert!(cursor.has_previous());
//!
//! assert_eq!(cursor.previous(), Ok(&3)); // moves to position 2
//! assert_eq!(cursor.next_index(), 2);
//!
//! // Reading forward again returns the same element.
//! assert_eq!(cursor.next(), Ok(&3));
//! assert_eq!(cursor.next(), Err(Error::NoSuchElement));
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides ways to mutate the list at any position:
//! - [`insert`]: splice a new element in at the cursor position;
//! - [`remove`]: unlink the element returned by the latest read;
//! - [`replace`]: substitute the value of the element returned by the
//!   latest read.
//!
//! [`remove`] and [`replace`] require a read first; they fail with
//! [`Error::IllegalState`] when no element has been read since the cursor
//! was created or since it last changed the list.
//!
//! ## Examples
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_mut(2).unwrap();
//!
//! cursor.insert(5); // becomes [1, 2, 5, 3, 4], cursor before 3
//! assert_eq!(cursor.next_index(), 3);
//!
//! assert_eq!(cursor.next(), Ok(&3));
//! assert_eq!(cursor.replace(30), Ok(3)); // becomes [1, 2, 5, 30, 4]
//!
//! assert_eq!(cursor.previous(), Ok(&30));
//! assert_eq!(cursor.remove(), Ok(30)); // becomes [1, 2, 5, 4]
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 5, 4]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`next`]: crate::list::cursor::Cursor::next
//! [`previous`]: crate::list::cursor::Cursor::previous
//! [`has_next`]: crate::list::cursor::Cursor::has_next
//! [`has_previous`]: crate::list::cursor::Cursor::has_previous
//! [`next_index`]: crate::list::cursor::Cursor::next_index
//! [`previous_index`]: crate::list::cursor::Cursor::previous_index
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`replace`]: crate::list::cursor::CursorMut::replace
//! [`Error::IllegalState`]: crate::Error::IllegalState

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;

mod experiments;
