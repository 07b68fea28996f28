// SPDX-License-Identifier: FSL-1.1

/// Trait for a value stack
pub trait Stack<T> {
    /// push a value onto the stack
    fn push(&mut self, value: T);

    /// remove the top value from the stack
    fn pop(&mut self) -> Option<T>;

    /// get a reference to the top value on the stack
    fn top(&self) -> Option<&T>;

    /// peek at the item at the given index, counting down from the top
    fn peek(&self, idx: usize) -> Option<&T>;

    /// return the number of values on the stack
    fn len(&self) -> usize;

    /// return if the stack is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
