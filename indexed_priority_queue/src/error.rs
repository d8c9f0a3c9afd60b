use std::convert::Infallible;

use thiserror::Error;

/// Error type for fallible operations of [`IndexedPriorityQueue`].
///
/// A failed operation never changes the queue.
///
/// [`IndexedPriorityQueue`]: struct.IndexedPriorityQueue.html
#[derive(Debug, Error, PartialEq, Eq, Hash, Copy, Clone)]
pub enum QueueError {
    /// Queue doesn't contain such key.
    #[error("Key not found in IndexedPriorityQueue")]
    NotFound,

    /// Operation needs at least one element.
    #[error("IndexedPriorityQueue is empty")]
    EmptyHeap,

    /// Priority value doesn't belong to a totally ordered domain (e.g. NaN).
    #[error("Priority value is not totally ordered")]
    InvalidPriority,

    /// Key has several occurrences so it is unknown which one to change.
    #[error("Key has {occurrences} occurrences in IndexedPriorityQueue, cannot choose one")]
    AmbiguousKey {
        /// Number of occurrences of the key at the moment of the call.
        occurrences: usize,
    },
}

impl From<Infallible> for QueueError {
    #[inline]
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Returned by [`check_invariants`] when heap order or key positions are broken.
///
/// [`check_invariants`]: struct.IndexedPriorityQueue.html#method.check_invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Description of the violated invariant.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}
