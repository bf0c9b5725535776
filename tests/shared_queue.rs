use std::sync::Mutex;

use locked_queue::{ConcurrentQueue, Handle, SharedQueue};

/// Pushes `producers * per_thread` distinct values while `consumers` threads pop half of them,
/// then checks nothing was lost or duplicated.
fn check_all_exist<Q>(queue: Q, producers: usize, consumers: usize, per_thread: usize)
where
    Q: SharedQueue<usize>,
    for<'a> &'a Q: Send,
{
    let to_pop = producers * per_thread / 2 / consumers;
    let collected = Mutex::new(Vec::new());
    std::thread::scope(|s| {
        let queue = &queue;
        for c in 0..producers {
            s.spawn(move || {
                let mut handle = queue.register();
                for i in (c * per_thread)..((c + 1) * per_thread) {
                    handle.enqueue(i).expect("unbounded queue rejected an item");
                }
            });
        }
        for _ in 0..consumers {
            let collected = &collected;
            s.spawn(move || {
                let mut handle = queue.register();
                let mut local = Vec::with_capacity(to_pop);
                while local.len() < to_pop {
                    if let Some(v) = handle.dequeue() {
                        local.push(v);
                    }
                }
                collected.lock().unwrap().extend(local);
            });
        }
    });

    let mut collected = collected.into_inner().unwrap();
    assert_eq!(collected.len(), to_pop * consumers);
    let mut handle = queue.register();
    while let Some(v) = handle.dequeue() {
        collected.push(v);
    }
    collected.sort_unstable();
    assert_eq!(collected, (0..producers * per_thread).collect::<Vec<_>>());
}

#[test]
fn locked_queue_keeps_every_element() {
    check_all_exist(ConcurrentQueue::new(), 10, 5, 200);
}

#[test]
fn baselines_keep_every_element() {
    check_all_exist(crossbeam_queue::SegQueue::new(), 4, 2, 200);
    check_all_exist(concurrent_queue::ConcurrentQueue::unbounded(), 4, 2, 200);
    check_all_exist(lockfree::queue::Queue::new(), 4, 2, 200);
}

#[test]
fn handle_reports_full_queue() {
    let queue = ConcurrentQueue::bounded(2);
    let mut handle = queue.register();
    assert_eq!(handle.enqueue("a"), Ok(()));
    assert_eq!(handle.enqueue("b"), Ok(()));
    assert_eq!(handle.enqueue("c"), Err("c"));
    assert_eq!(queue.len(), 2);
    assert_eq!(handle.dequeue(), Some("a"));
    assert_eq!(handle.enqueue("c"), Ok(()));
    assert_eq!(queue.values(), vec!["b", "c"]);
}

#[test]
fn queue_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConcurrentQueue<String>>();
}
