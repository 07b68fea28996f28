// SPDX-License-Identifier: FSL-1.1
/// The interface to a key-value pairs store
pub mod pairs;

/// The interface to a first-in-first-out queue
pub mod queue;

/// The interface to a last-in-first-out stack
pub mod stack;

pub use pairs::Pairs;
pub use queue::Queue;
pub use stack::Stack;
