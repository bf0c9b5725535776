use thiserror::Error;

/// Returned by [`ConcurrentQueue::push`](super::ConcurrentQueue::push) when the element could not
/// be stored. The queue is left untouched and the element is handed back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PushError<T> {
    #[error("can't push element, queue beyond limits ({capacity})")]
    Full { element: T, capacity: usize },
}

impl<T> PushError<T> {
    /// Gives back the rejected element.
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full { element, .. } => element,
        }
    }

    pub fn capacity(&self) -> usize {
        match self {
            PushError::Full { capacity, .. } => *capacity,
        }
    }
}
