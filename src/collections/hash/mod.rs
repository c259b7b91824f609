//! Hash-based collections. Currently this is only [`HashTable`], an open-addressed table keyed by
//! strings or integers.

pub mod table;

#[doc(inline)]
pub use table::{HashTable, TableKey};
