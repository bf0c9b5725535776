use lockfree::queue::Queue;

use crate::{Handle, SharedQueue};

pub struct LockfreeHandle<'q, T> {
    queue: &'q Queue<T>,
}

impl<T> Handle<T> for LockfreeHandle<'_, T> {
    fn enqueue(&mut self, item: T) -> Result<(), T> {
        self.queue.push(item);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        self.queue.pop()
    }
}

impl<T> SharedQueue<T> for Queue<T> {
    fn register(&self) -> impl Handle<T> {
        LockfreeHandle { queue: self }
    }
}
