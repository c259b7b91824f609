//! Various general-purpose collection types.
//!
//! # Purpose
//! These types are reference implementations: each one favours a readable, obviously-correct
//! layout over raw speed, while still avoiding recursion limits and needless copies.
//!
//! # Method
//! Errors are shared between the collections and live in [`error`], with each collection module
//! re-exporting the ones it can return.

pub mod error;

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;

#[doc(inline)]
pub use error::CollectionError;
