//! This crate is a small collection of foundational, in-memory data structures.
//!
//! # Purpose
//! Each type here is a minimal reference implementation of a common container: something small
//! enough to read in one sitting, but written carefully enough that it could actually be used.
//! Nothing is thread-safe, nothing is persisted and nothing supports removal of arbitrary entries.
//!
//! # Contents
//! - [`BinarySearchTree`](collections::binary_tree::BinarySearchTree): an unbalanced BST which
//!   keeps duplicates and yields its values in sorted order.
//! - [`HashTable`](collections::hash::HashTable): an open-addressed table using linear probing,
//!   which grows once its load factor reaches 7/10.
//! - [`Stack`](collections::contiguous::Stack) and [`Queue`](collections::contiguous::Queue): thin
//!   LIFO and FIFO wrappers over contiguous buffers.
//!
//! # Error Handling
//! Operations which can fail return a [`Result`] with a dedicated error struct (often a ZST) that
//! implements [`Error`](std::error::Error). All of them convert into
//! [`CollectionError`](collections::CollectionError), so a caller juggling several collections can
//! use `?` with a single error type.
//!
//! # Dependencies
//! `derive_more` removes the repetitive `Display` and `Error` impls from the error types, and the
//! [`log`] facade reports table growth. No logger is installed by this crate.
//!
//! # Features
//! Each collection sits behind a feature (`binary-tree`, `hash`, `contiguous`), all enabled by the
//! default `collections-all` feature.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
