//! Benchmark workloads for the M269 ADTs library.
//!
//! Shared by the Criterion benchmarks so that every representation of an ADT
//! is measured on exactly the same workload.

use crate::data_structures::{Bag, Fifo, Lifo};

/// Fills `queue` with `0..size`.
pub fn fill_queue<Q: Fifo<usize>>(queue: &mut Q, size: usize) {
    for i in 0..size {
        queue.enqueue(i);
    }
}

/// Dequeues until `queue` is empty and returns the sum of the items.
pub fn drain_queue<Q: Fifo<usize>>(queue: &mut Q) -> usize {
    let mut sum = 0;
    while let Ok(item) = queue.dequeue() {
        sum += item;
    }
    sum
}

/// Pushes `0..size` onto `stack`, then pops everything back off.
pub fn push_pop_stack<S: Lifo<usize>>(stack: &mut S, size: usize) -> usize {
    for i in 0..size {
        stack.push(i);
    }
    let mut sum = 0;
    while let Ok(item) = stack.pop() {
        sum += item;
    }
    sum
}

/// Builds a bag of `size` items drawn from `distinct` values.
pub fn spread_bag(size: usize, distinct: usize) -> Bag<usize> {
    (0..size).map(|i| i % distinct.max(1)).collect()
}
