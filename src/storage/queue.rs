// SPDX-License-Identifier: FSL-1.1

/// Trait for a value queue
pub trait Queue<T> {
    /// add a value to the back of the queue
    fn enqueue(&mut self, value: T);

    /// remove the value at the front of the queue
    fn dequeue(&mut self) -> Option<T>;

    /// get a reference to the value at the front of the queue
    fn front(&self) -> Option<&T>;

    /// get a reference to the value at the back of the queue
    fn back(&self) -> Option<&T>;

    /// return the number of values in the queue
    fn len(&self) -> usize;

    /// return if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
