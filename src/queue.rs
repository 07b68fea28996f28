// SPDX-License-Identifier: FSL-1.1
use crate::{dump, storage, Error};
use log::{debug, trace};
use std::{fmt, io::Write};

struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A first-in-first-out queue of singly-linked nodes.
///
/// The nodes live in an arena and link to each other by slot index. Each
/// node exclusively owns the link to its successor while the queue only
/// holds the indices of the first (`start`) and last (`end`) nodes. Slots
/// freed by [`LinkedQueue::dequeue`] are reused by later enqueues and the
/// arena is released once the queue drains.
pub struct LinkedQueue<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    start: Option<usize>,
    end: Option<usize>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    /// create a new, empty queue
    pub fn new() -> Self {
        Self {
            slots: Vec::default(),
            free: Vec::default(),
            start: None,
            end: None,
            len: 0,
        }
    }

    /// add a value to the back of the queue
    pub fn enqueue(&mut self, value: T) {
        let idx = self.alloc(Node { value, next: None });
        match self.end.and_then(|end| self.node_mut(end)) {
            // link the new node after the current end
            Some(end) => end.next = Some(idx),
            // the queue was empty so the new node is also the start
            None => self.start = Some(idx),
        }
        self.end = Some(idx);
        self.len += 1;
        trace!("enqueue -> len {}", self.len);
    }

    /// remove and return the value at the front, or None if the queue is empty
    pub fn dequeue(&mut self) -> Option<T> {
        let Some(node) = self.start.and_then(|start| self.release(start)) else {
            debug!("dequeue on empty queue");
            return None;
        };

        if self.len == 1 {
            self.start = None;
            self.end = None;
            self.slots.clear();
            self.free.clear();
        } else {
            self.start = node.next;
        }
        self.len -= 1;
        trace!("dequeue -> len {}", self.len);
        Some(node.value)
    }

    /// get a reference to the value at the front
    pub fn front(&self) -> Option<&T> {
        self.start.and_then(|idx| self.node(idx)).map(|node| &node.value)
    }

    /// get a reference to the value at the back
    pub fn back(&self) -> Option<&T> {
        self.end.and_then(|idx| self.node(idx)).map(|node| &node.value)
    }

    /// the number of values in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// true if there are no values in the queue
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<Node<T>> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            queue: self,
            next: self.start,
        }
    }
}

impl<T: fmt::Display> LinkedQueue<T> {
    /// Write every value from front to back, one per line
    pub fn write_all<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), Error> {
        dump::write_lines(w, self.values())
    }

    /// Print every value from front to back to stdout
    pub fn print_all(&self) -> Result<(), Error> {
        dump::print_lines(self.values())
    }
}

struct Values<'a, T> {
    queue: &'a LinkedQueue<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let queue = self.queue;
        let node = self.next.and_then(|idx| queue.node(idx))?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> storage::Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) {
        LinkedQueue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Option<T> {
        LinkedQueue::dequeue(self)
    }

    fn front(&self) -> Option<&T> {
        LinkedQueue::front(self)
    }

    fn back(&self) -> Option<&T> {
        LinkedQueue::back(self)
    }

    fn len(&self) -> usize {
        self.len
    }
}
