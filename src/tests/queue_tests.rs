//! Tests for the queue implementations.
//!
//! Both representations are checked against a `VecDeque` model.

use crate::data_structures::queue::{Fifo, LinkedListQueue, QueueError, VecQueue};
use crate::tests::{items_strategy, queue_ops_strategy, QueueOp};
use proptest::prelude::*;
use std::collections::VecDeque;
use test_case::test_case;

/// Replays `ops` on `queue`, recording what every `Dequeue` and `Front`
/// observed.
fn replay<Q: Fifo<i32>>(queue: &mut Q, ops: &[QueueOp]) -> Vec<Result<i32, QueueError>> {
    let mut observed = Vec::new();
    for op in ops {
        match *op {
            QueueOp::Enqueue(value) => queue.enqueue(value),
            QueueOp::Dequeue => observed.push(queue.dequeue()),
            QueueOp::Front => observed.push(queue.front().copied()),
        }
    }
    observed
}

/// Replays `ops` on a `VecDeque` used as the reference queue.
fn replay_model(ops: &[QueueOp]) -> (Vec<Result<i32, QueueError>>, usize) {
    let mut model = VecDeque::new();
    let mut observed = Vec::new();
    for op in ops {
        match *op {
            QueueOp::Enqueue(value) => model.push_back(value),
            QueueOp::Dequeue => observed.push(
                model
                    .pop_front()
                    .ok_or(QueueError::Empty { operation: "dequeue" }),
            ),
            QueueOp::Front => observed.push(
                model
                    .front()
                    .copied()
                    .ok_or(QueueError::Empty { operation: "front" }),
            ),
        }
    }
    (observed, model.len())
}

fn counting_scenario<Q: Fifo<usize> + Default>() {
    let mut queue = Q::default();

    for n in 0..3 {
        queue.enqueue(n);
        assert_eq!(queue.front(), Ok(&0));
    }

    let mut dequeued = Vec::new();
    while queue.size() > 0 {
        dequeued.push(queue.dequeue().unwrap());
    }
    assert_eq!(dequeued, vec![0, 1, 2]);
}

#[test]
fn test_counting_scenario_vec() {
    counting_scenario::<VecQueue<usize>>();
}

#[test]
fn test_counting_scenario_linked() {
    counting_scenario::<LinkedListQueue<usize>>();
}

#[test_case(0 ; "never filled")]
#[test_case(1 ; "one item")]
#[test_case(64 ; "many items")]
fn test_empty_after_draining(count: usize) {
    fn check<Q: Fifo<usize> + Default>(count: usize) {
        let mut queue = Q::default();
        for n in 0..count {
            queue.enqueue(n);
        }
        for n in 0..count {
            assert_eq!(queue.dequeue(), Ok(n));
        }
        assert_eq!(queue.front(), Err(QueueError::Empty { operation: "front" }));
        assert_eq!(
            queue.dequeue(),
            Err(QueueError::Empty { operation: "dequeue" })
        );

        // Still usable after a rejected call.
        queue.enqueue(7);
        assert_eq!(queue.front(), Ok(&7));
    }

    check::<VecQueue<usize>>(count);
    check::<LinkedListQueue<usize>>(count);
}

proptest! {
    // Enqueuing e1..en then dequeuing n times yields e1..en.
    #[test]
    fn prop_fifo_law(items in items_strategy()) {
        let mut vec_queue = VecQueue::new();
        let mut linked_queue = LinkedListQueue::new();
        for &item in &items {
            vec_queue.enqueue(item);
            linked_queue.enqueue(item);
        }

        let from_vec: Vec<i32> = (0..items.len()).map(|_| vec_queue.dequeue().unwrap()).collect();
        let from_linked: Vec<i32> = (0..items.len()).map(|_| linked_queue.dequeue().unwrap()).collect();

        prop_assert_eq!(&from_vec, &items);
        prop_assert_eq!(&from_linked, &items);
    }

    // Both representations behave exactly like a VecDeque, including rejections.
    #[test]
    fn prop_matches_model(ops in queue_ops_strategy()) {
        let (expected, expected_size) = replay_model(&ops);

        let mut vec_queue = VecQueue::new();
        prop_assert_eq!(replay(&mut vec_queue, &ops), expected.clone());
        prop_assert_eq!(vec_queue.size(), expected_size);

        let mut linked_queue = LinkedListQueue::new();
        prop_assert_eq!(replay(&mut linked_queue, &ops), expected);
        prop_assert_eq!(linked_queue.size(), expected_size);
    }

    // After k enqueues and m <= k dequeues the size is k - m.
    #[test]
    fn prop_size_accounting(items in items_strategy(), dequeues in 0usize..100) {
        let dequeues = dequeues.min(items.len());
        let mut queue = VecQueue::new();
        for &item in &items {
            queue.enqueue(item);
        }
        for _ in 0..dequeues {
            queue.dequeue().unwrap();
        }
        prop_assert_eq!(queue.size(), items.len() - dequeues);
    }
}
