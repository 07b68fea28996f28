// SPDX-License-Identifier: FSL-1.1
use crate::{dump, storage, Error};
use log::{debug, trace};
use std::{fmt, io::Write};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A last-in-first-out stack of singly-linked nodes. Each node owns the node
/// beneath it and the stack owns the top node.
pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// create a new, empty stack
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// push a value onto the top of the stack
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
        trace!("push -> len {}", self.len);
    }

    /// remove and return the top value, or None if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        let Some(node) = self.top.take() else {
            debug!("pop on empty stack");
            return None;
        };
        let Node { value, next } = *node;
        self.top = next;
        self.len -= 1;
        trace!("pop -> len {}", self.len);
        Some(value)
    }

    /// get a reference to the top value
    pub fn top(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    /// get a reference to the value `idx` places below the top
    pub fn peek(&self, idx: usize) -> Option<&T> {
        self.values().nth(idx)
    }

    /// the number of values on the stack
    pub fn len(&self) -> usize {
        self.len
    }

    /// true if there are no values on the stack
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            next: self.top.as_deref(),
        }
    }
}

impl<T: fmt::Display> LinkedStack<T> {
    /// Write every value from the top down, one per line
    pub fn write_all<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), Error> {
        dump::write_lines(w, self.values())
    }

    /// Print every value from the top down to stdout
    pub fn print_all(&self) -> Result<(), Error> {
        dump::print_lines(self.values())
    }
}

struct Values<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // unlink one node at a time so long stacks don't recurse on drop
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> storage::Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) {
        LinkedStack::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        LinkedStack::pop(self)
    }

    fn top(&self) -> Option<&T> {
        LinkedStack::top(self)
    }

    fn peek(&self, idx: usize) -> Option<&T> {
        LinkedStack::peek(self, idx)
    }

    fn len(&self) -> usize {
        self.len
    }
}
