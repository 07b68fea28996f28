// SPDX-License-Identifier: FSL-1.1
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

//! Elementary single-threaded containers.
//!
//! [`KeyValueStore`] wraps a hash table, [`LinkedQueue`] is a FIFO and
//! [`LinkedStack`] is a LIFO, both built from singly-linked nodes. Removing
//! from an empty queue or stack returns `None` rather than failing. None of
//! the containers synchronize access; share them across threads behind your
//! own lock.

/// Line-oriented dumps of container contents
pub(crate) mod dump;

/// Errors produced by this library
pub mod error;
pub use error::Error;

/// The linked-list queue
pub mod queue;
pub use queue::LinkedQueue;

/// The linked-list stack
pub mod stack;
pub use stack::LinkedStack;

/// Storage traits
pub mod storage;
pub use storage::{Pairs, Queue, Stack};

/// The hash-backed key-value store
pub mod store;
pub use store::{Builder, KeyValueStore};

/// ...and in the darkness bind them
pub mod prelude {
    pub use super::*;
}
