use concurrent_queue::ConcurrentQueue;

use crate::{Handle, SharedQueue};

/// Handle over `concurrent_queue::ConcurrentQueue`, which may be bounded or unbounded.
pub struct ConcurrentQueueHandle<'q, T> {
    queue: &'q ConcurrentQueue<T>,
}

impl<T> Handle<T> for ConcurrentQueueHandle<'_, T> {
    fn enqueue(&mut self, item: T) -> Result<(), T> {
        self.queue.push(item).map_err(|err| err.into_inner())
    }

    fn dequeue(&mut self) -> Option<T> {
        self.queue.pop().ok()
    }
}

impl<T> SharedQueue<T> for ConcurrentQueue<T> {
    fn register(&self) -> impl Handle<T> {
        ConcurrentQueueHandle { queue: self }
    }
}
