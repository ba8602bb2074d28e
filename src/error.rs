use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Backing storage for a queue, an element or a string copy could not be obtained.
    /// The queue the operation was applied to is left exactly as it was.
    #[error("failed to allocate {size} bytes for {what}")]
    AllocationFailure { what: &'static str, size: usize },
}
