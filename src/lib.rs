//! Fluent construction of container contents.
//!
//! Two small, independent utilities:
//!
//! - [`insert_into`] borrows an existing container and inserts values into it
//!   one at a time with a chained call syntax.
//! - [`list_of`] / [`ListBuilder`] accumulate an ordered sequence of values
//!   and convert it, on demand and without consuming the builder, into a
//!   collection, a fixed-size array, or any type with a push-style insertion
//!   operation.
//!
//! ```
//! use list_builder::{insert_into, list_of};
//! use std::collections::BTreeSet;
//!
//! let evens: Vec<u32> = list_of([0u32]).push(2u32).repeat_with(2, || 4).to_container();
//! assert_eq!(evens, [0, 2, 4, 4]);
//!
//! let mut set = BTreeSet::new();
//! insert_into(&mut set).add(3).add(1).add(2);
//! assert_eq!(set.into_iter().collect::<Vec<i32>>(), [1, 2, 3]);
//! ```

mod insert;
mod list;

pub use insert::*;
pub use list::*;
