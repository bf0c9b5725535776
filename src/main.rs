use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
    time::Duration,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use locked_queue::{Capacity, ConcurrentQueue, Handle, SharedQueue};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = BenchConfig::parse();
    let capacity = Capacity::from(config.capacity);
    info!(queue = ?config.queue, %capacity, "starting benchmark");

    match config.queue {
        QueueKind::Locked => {
            benchmark_producer_consumer(ConcurrentQueue::with_capacity(capacity), &config)
        }
        QueueKind::Concurrent => {
            let queue = match capacity {
                Capacity::Bounded(limit) => concurrent_queue::ConcurrentQueue::bounded(limit),
                Capacity::Unbounded => concurrent_queue::ConcurrentQueue::unbounded(),
            };
            benchmark_producer_consumer(queue, &config)
        }
        QueueKind::Seg => {
            warn_unbounded(capacity);
            benchmark_producer_consumer(crossbeam_queue::SegQueue::new(), &config)
        }
        QueueKind::Lockfree => {
            warn_unbounded(capacity);
            benchmark_producer_consumer(lockfree::queue::Queue::new(), &config)
        }
    }
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct BenchConfig {
    /// queue implementation to benchmark.
    #[arg(long, value_enum, default_value_t = QueueKind::Locked)]
    queue: QueueKind,
    /// maximum number of elements in the queue. unbounded when left out.
    #[arg(long, value_parser = parse_capacity)]
    capacity: Option<usize>,
    /// number of elements to add to the queue before starting the main
    /// threaded test.
    #[arg(long, default_value_t = 0)]
    prefill: usize,
    /// number of threads pushing elements onto the queue.
    #[arg(long)]
    producer_threads: usize,
    /// number of threads popping elements off the queue.
    #[arg(long)]
    consumer_threads: usize,
    /// duration in seconds to run the test
    #[arg(long)]
    duration: u64,
    /// pin every worker thread to its own core, wrapping around when there
    /// are more threads than cores.
    #[arg(long)]
    pin: bool,
    /// seed for the pushed payloads.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QueueKind {
    /// `ConcurrentQueue` from this crate
    Locked,
    /// `crossbeam_queue::SegQueue`
    Seg,
    /// `concurrent_queue::ConcurrentQueue`
    Concurrent,
    /// `lockfree::queue::Queue`
    Lockfree,
}

fn parse_capacity(arg: &str) -> Result<usize, String> {
    let capacity: usize = arg.parse().map_err(|err| format!("{err}"))?;
    if capacity == 0 {
        return Err("capacity must be at least 1".to_string());
    }
    Ok(capacity)
}

fn warn_unbounded(capacity: Capacity) {
    if !capacity.is_unbounded() {
        warn!(%capacity, "queue is always unbounded, ignoring capacity");
    }
}

fn pin_to_core(index: usize, cores: &[core_affinity::CoreId]) {
    if cores.is_empty() {
        return;
    }
    let core = cores[index % cores.len()];
    if !core_affinity::set_for_current(core) {
        warn!(core = core.id, "failed to pin worker thread");
    }
}

fn benchmark_producer_consumer<C>(queue: C, config: &BenchConfig)
where
    C: SharedQueue<u64>,
    for<'a> &'a C: Send,
{
    let mut handle = queue.register();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut prefilled = 0;
    for _ in 0..config.prefill {
        if handle.enqueue(rng.gen()).is_err() {
            break;
        }
        prefilled += 1;
    }
    if prefilled < config.prefill {
        warn!(prefilled, requested = config.prefill, "queue filled up during prefill");
    }

    let cores = if config.pin {
        core_affinity::get_core_ids().unwrap_or_default()
    } else {
        Vec::new()
    };
    if config.pin && cores.is_empty() {
        warn!("could not list cores, running unpinned");
    }

    let done: AtomicBool = AtomicBool::new(false);
    let enqueues = AtomicUsize::new(0);
    let rejected = AtomicUsize::new(0);
    let dequeues = AtomicUsize::new(0);

    thread::scope(|s| {
        for t in 0..config.producer_threads {
            let (queue, cores, done) = (&queue, &cores, &done);
            let (enqueues, rejected) = (&enqueues, &rejected);
            s.spawn(move || {
                pin_to_core(t, cores);
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(t as u64 + 1));
                let mut local_enqueues = 0;
                let mut local_rejected = 0;
                let mut handle = queue.register();
                while !done.load(Ordering::Relaxed) {
                    match handle.enqueue(rng.gen()) {
                        Ok(()) => local_enqueues += 1,
                        Err(_) => local_rejected += 1,
                    }
                }
                enqueues.fetch_add(local_enqueues, Ordering::Relaxed);
                rejected.fetch_add(local_rejected, Ordering::Relaxed);
            });
        }
        for t in 0..config.consumer_threads {
            let (queue, cores, done, dequeues) = (&queue, &cores, &done, &dequeues);
            s.spawn(move || {
                pin_to_core(config.producer_threads + t, cores);
                let mut local_dequeues = 0;
                let mut handle = queue.register();
                while !done.load(Ordering::Relaxed) {
                    if handle.dequeue().is_some() {
                        local_dequeues += 1;
                    }
                }
                dequeues.fetch_add(local_dequeues, Ordering::Relaxed);
            });
        }

        thread::sleep(Duration::from_secs(config.duration));
        done.store(true, Ordering::Relaxed);
    });

    let enqueues = enqueues.into_inner();
    let rejected = rejected.into_inner();
    let dequeues = dequeues.into_inner();
    println!(
        "throughput: {}",
        (enqueues + dequeues) as f64 / config.duration.max(1) as f64
    );
    println!("number of enqueues: {}", enqueues);
    println!("number of rejected enqueues: {}", rejected);
    println!("number of dequeues: {}", dequeues);
}
