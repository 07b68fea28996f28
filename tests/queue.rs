// SPDX-License-Identifier: FSL-1.1
use elementary::{storage::Queue, LinkedQueue};
use std::collections::VecDeque;

#[derive(Default)]
struct Que {
    pub queue: VecDeque<u32>,
}

impl Queue<u32> for Que {
    /// add a value to the back of the queue
    fn enqueue(&mut self, value: u32) {
        self.queue.push_back(value);
    }

    /// remove the value at the front of the queue
    fn dequeue(&mut self) -> Option<u32> {
        self.queue.pop_front()
    }

    /// get a reference to the value at the front of the queue
    fn front(&self) -> Option<&u32> {
        self.queue.front()
    }

    /// get a reference to the value at the back of the queue
    fn back(&self) -> Option<&u32> {
        self.queue.back()
    }

    /// return the number of values in the queue
    fn len(&self) -> usize {
        self.queue.len()
    }
}

// drives any queue through a fixed mix of operations, recording every observation
fn exercise(queue: &mut impl Queue<u32>) -> Vec<(Option<u32>, Option<u32>, Option<u32>, usize)> {
    let mut seen = Vec::default();
    for i in 0..40 {
        queue.enqueue(i);
        let out = if i % 3 == 0 { queue.dequeue() } else { None };
        seen.push((out, queue.front().copied(), queue.back().copied(), queue.len()));
    }
    while let Some(v) = queue.dequeue() {
        seen.push((Some(v), queue.front().copied(), queue.back().copied(), queue.len()));
    }
    seen
}

#[test_log::test]
fn test_fifo_order() {
    let values = [10, 20, 30, 40, 50];
    let mut queue = LinkedQueue::new();
    for v in values {
        queue.enqueue(v);
    }
    for expected in values {
        assert_eq!(Some(expected), queue.dequeue());
    }
    assert_eq!(0, queue.len());
    assert_eq!(None, queue.front());
    assert_eq!(None, queue.back());
}

#[test_log::test]
fn test_dequeue_middle_state() {
    let mut queue = LinkedQueue::new();
    queue.enqueue(30);
    queue.enqueue(40);
    queue.enqueue(50);

    assert_eq!(Some(30), queue.dequeue());
    assert_eq!(2, queue.len());
    assert_eq!(Some(&40), queue.front());
    assert_eq!(Some(&50), queue.back());
}

#[test_log::test]
fn test_dequeue_empty() {
    let mut queue: LinkedQueue<String> = LinkedQueue::default();
    assert_eq!(None, queue.dequeue());
    assert_eq!(0, queue.len());
    assert!(queue.is_empty());
}

#[test_log::test]
fn test_refill_after_drain() {
    let mut queue = LinkedQueue::new();
    queue.enqueue(10);
    assert_eq!(Some(10), queue.dequeue());
    queue.enqueue(20);
    assert_eq!(1, queue.len());
    assert_eq!(Some(&20), queue.front());
    assert_eq!(Some(&20), queue.back());
}

#[test_log::test]
fn test_matches_vecdeque_queue() {
    let mut linked: LinkedQueue<u32> = LinkedQueue::new();
    let mut reference = Que::default();
    assert_eq!(exercise(&mut reference), exercise(&mut linked));
    assert!(Queue::is_empty(&linked));
}

#[test_log::test]
fn test_write_all() {
    let queue: LinkedQueue<u32> = [7, 8, 9].into_iter().collect();
    let mut buf = Vec::default();
    queue.write_all(&mut buf).unwrap();
    assert_eq!("7\n8\n9\n", String::from_utf8(buf).unwrap());
    assert_eq!(3, queue.len());
}
