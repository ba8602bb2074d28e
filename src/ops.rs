//! Handle-level operations for drivers that may hold no queue at all.
//!
//! An absent queue is `None`: mutating operations report failure or do nothing, and
//! `size` reports zero.

use crate::{queue::alloc::try_box, QueueError, StringQueue};

/// Allocates an empty queue on the heap, surfacing allocation failure to the caller.
pub fn new() -> Result<Box<StringQueue>, QueueError> {
    try_box(StringQueue::new(), "queue")
}

/// Releases every element head to tail, then the queue itself.
pub fn destroy(queue: Option<Box<StringQueue>>) {
    drop(queue);
}

pub fn insert_head(queue: Option<&mut StringQueue>, s: &str) -> bool {
    queue.is_some_and(|queue| queue.insert_head(s).is_ok())
}

pub fn insert_tail(queue: Option<&mut StringQueue>, s: &str) -> bool {
    queue.is_some_and(|queue| queue.insert_tail(s).is_ok())
}

/// See [`StringQueue::remove_head_into`] for the buffer contract.
pub fn remove_head(queue: Option<&mut StringQueue>, buf: Option<&mut [u8]>) -> bool {
    queue.is_some_and(|queue| queue.remove_head_into(buf))
}

pub fn size(queue: Option<&StringQueue>) -> usize {
    queue.map_or(0, StringQueue::len)
}

pub fn reverse(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}
