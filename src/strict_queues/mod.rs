//! Third-party strict FIFO queues behind the same [`SharedQueue`](crate::SharedQueue) interface,
//! used as baselines when benchmarking [`ConcurrentQueue`](crate::ConcurrentQueue).

pub mod concurrent_queue;
pub mod crossbeam_queue;
pub mod lockfree_queue;
