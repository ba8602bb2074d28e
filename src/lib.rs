pub mod baseline;
pub mod error;
pub mod ops;
pub mod queue;

pub use error::QueueError;
pub use queue::StringQueue;

/// A queue of owned strings that can be driven from either end.
pub trait Fifo {
    /// Appends a copy of `item` at the tail.
    fn enqueue(&mut self, item: &str) -> Result<(), QueueError>;

    /// Puts a copy of `item` back at the head, ahead of everything else.
    fn requeue(&mut self, item: &str) -> Result<(), QueueError>;

    fn dequeue(&mut self) -> Option<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn reverse(&mut self);

    fn sort(&mut self);
}

impl Fifo for StringQueue {
    fn enqueue(&mut self, item: &str) -> Result<(), QueueError> {
        self.insert_tail(item)
    }

    fn requeue(&mut self, item: &str) -> Result<(), QueueError> {
        self.insert_head(item)
    }

    fn dequeue(&mut self) -> Option<String> {
        self.remove_head()
    }

    fn len(&self) -> usize {
        StringQueue::len(self)
    }

    fn reverse(&mut self) {
        StringQueue::reverse(self);
    }

    fn sort(&mut self) {
        StringQueue::sort(self);
    }
}
