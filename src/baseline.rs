//! `Fifo` for the standard ring buffer, used as a point of comparison.

use std::collections::VecDeque;

use crate::{queue::alloc::try_copy_str, Fifo, QueueError};

fn reserve_slot(queue: &mut VecDeque<String>) -> Result<(), QueueError> {
    queue
        .try_reserve(1)
        .map_err(|_| QueueError::AllocationFailure {
            what: "ring slot",
            size: std::mem::size_of::<String>(),
        })
}

impl Fifo for VecDeque<String> {
    fn enqueue(&mut self, item: &str) -> Result<(), QueueError> {
        let item = try_copy_str(item)?;
        reserve_slot(self)?;
        self.push_back(item);
        Ok(())
    }

    fn requeue(&mut self, item: &str) -> Result<(), QueueError> {
        let item = try_copy_str(item)?;
        reserve_slot(self)?;
        self.push_front(item);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<String> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn reverse(&mut self) {
        self.make_contiguous().reverse();
    }

    fn sort(&mut self) {
        self.make_contiguous().sort();
    }
}
