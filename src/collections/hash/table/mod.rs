//! A module containing [`HashTable`] and associated types.
//!
//! Besides the table itself, this module provides the [`TableKey`] trait, which defines how strings
//! and integers are mapped onto slots, and borrowed or owned iteration over entries, keys and
//! values.
//!
//! There is no way to remove an entry. Linear probing relies on an unbroken run of occupied slots
//! between a key's home slot and the slot it ended up in, so removal would need tombstones.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod hash_table;
mod iter;
mod key;

pub use hash_table::*;
pub use iter::*;
pub use key::*;
#[doc(inline)]
pub use crate::collections::error::KeyNotFound;
