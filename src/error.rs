use thiserror::Error;

/// Errors reported by [`Queue`](crate::Queue) operations.
///
/// A failed operation leaves the queue exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("failed to allocate {requested} bytes for an element")]
    AllocationFailure { requested: usize },
    #[error("the queue is empty")]
    Empty,
}

pub type Result<T, E = QueueError> = std::result::Result<T, E>;
