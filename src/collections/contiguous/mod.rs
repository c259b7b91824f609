//! Collections backed by a contiguous buffer: [`Stack`] for last-in first-out access and [`Queue`]
//! for first-in first-out access.
#![warn(missing_docs)]

pub mod queue;
pub mod stack;
mod tests;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use crate::collections::error::{EmptyQueue, EmptyStack};
