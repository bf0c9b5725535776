mod capacity;
mod chain;
mod error;

use std::fmt;

use parking_lot::RwLock;
use tracing::{debug, trace};

pub use capacity::Capacity;
pub use error::PushError;

use chain::Chain;

use crate::{Handle, SharedQueue};

/// A FIFO queue guarded by a single reader/writer lock.
///
/// `push` and `pop` take the lock exclusively, while `len`, `cap` and `values` share it. Nothing
/// ever waits on queue state: a full queue rejects the push and an empty queue pops `None`.
pub struct ConcurrentQueue<T> {
    state: RwLock<State<T>>,
}

struct State<T> {
    capacity: Capacity,
    chain: Chain<T>,
}

impl<T> ConcurrentQueue<T> {
    /// Creates an empty, unbounded queue.
    pub fn new() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    /// Creates an empty queue that holds at most `limit` elements.
    pub fn bounded(limit: usize) -> Self {
        Self::with_capacity(Capacity::Bounded(limit))
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        debug!(%capacity, "creating queue");
        Self {
            state: RwLock::new(State {
                capacity,
                chain: Chain::new(),
            }),
        }
    }

    pub fn cap(&self) -> Capacity {
        self.state.read().capacity
    }

    /// Number of stored elements. Concurrent pushes and pops may change it right after return.
    pub fn len(&self) -> usize {
        self.state.read().chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `element` at the tail.
    ///
    /// # Errors
    ///
    /// Fails with [`PushError::Full`] when the queue is bounded and already holds its capacity;
    /// the element is returned inside the error.
    pub fn push(&self, element: T) -> Result<(), PushError<T>> {
        let mut state = self.state.write();
        let len = state.chain.len();
        if !state.capacity.admits(len) {
            // Only a bounded queue refuses, so the limit is always there.
            let capacity = state.capacity.limit().unwrap_or(len);
            trace!(capacity, "rejecting push on full queue");
            return Err(PushError::Full { element, capacity });
        }
        state.chain.push_back(element);
        Ok(())
    }

    /// Removes and returns the head element, or `None` if the queue is empty.
    pub fn pop(&self) -> Option<T> {
        self.state.write().chain.pop_front()
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let state = self.state.read();
        state.chain.assert_invariants();
        if let Some(limit) = state.capacity.limit() {
            assert!(state.chain.len() <= limit);
        }
    }
}

impl<T: Clone> ConcurrentQueue<T> {
    /// Copies the current elements out, oldest first, without modifying the queue.
    pub fn values(&self) -> Vec<T> {
        let state = self.state.read();
        let mut values = Vec::with_capacity(state.chain.len());
        values.extend(state.chain.iter().cloned());
        values
    }
}

impl<T> Default for ConcurrentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConcurrentQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("ConcurrentQueue")
            .field("capacity", &state.capacity)
            .field("len", &state.chain.len())
            .field("values", &DebugValues(&state.chain))
            .finish()
    }
}

struct DebugValues<'a, T>(&'a Chain<T>);

impl<T: fmt::Debug> fmt::Debug for DebugValues<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

pub struct QueueHandle<'q, T> {
    queue: &'q ConcurrentQueue<T>,
}

impl<T> Handle<T> for QueueHandle<'_, T> {
    fn enqueue(&mut self, item: T) -> Result<(), T> {
        self.queue.push(item).map_err(PushError::into_inner)
    }

    fn dequeue(&mut self) -> Option<T> {
        self.queue.pop()
    }
}

impl<T> SharedQueue<T> for ConcurrentQueue<T> {
    fn register(&self) -> impl Handle<T> {
        QueueHandle { queue: self }
    }
}
