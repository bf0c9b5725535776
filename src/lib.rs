pub mod queue;
pub mod strict_queues;

pub use queue::{Capacity, ConcurrentQueue, PushError};

pub trait SharedQueue<T> {
    /// Returns a thread handle to the queue, which can be used for enqueues and dequeues
    fn register(&self) -> impl Handle<T>;
}

pub trait Handle<T> {
    /// Hands the item back if the queue refused it.
    fn enqueue(&mut self, item: T) -> Result<(), T>;

    fn dequeue(&mut self) -> Option<T>;
}
