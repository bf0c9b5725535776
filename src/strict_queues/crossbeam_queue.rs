use crossbeam_queue::SegQueue;

use crate::{Handle, SharedQueue};

pub struct SegQueueHandle<'q, T> {
    queue: &'q SegQueue<T>,
}

impl<T> Handle<T> for SegQueueHandle<'_, T> {
    fn enqueue(&mut self, item: T) -> Result<(), T> {
        self.queue.push(item);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        self.queue.pop()
    }
}

impl<T> SharedQueue<T> for SegQueue<T> {
    fn register(&self) -> impl Handle<T> {
        SegQueueHandle { queue: self }
    }
}

#[cfg(test)]
mod test {
    use crossbeam_queue::SegQueue;

    use crate::{Handle, SharedQueue};

    #[test]
    fn handle_is_fifo() {
        let queue = SegQueue::new();
        let mut handle = queue.register();
        handle.enqueue(1).unwrap();
        handle.enqueue(2).unwrap();
        assert_eq!(handle.dequeue(), Some(1));
        assert_eq!(handle.dequeue(), Some(2));
        assert_eq!(handle.dequeue(), None);
    }
}
