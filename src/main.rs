use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use clap::{Parser, ValueEnum};
use rand::{distributions::Alphanumeric, Rng};

use string_queue::{Fifo, StringQueue};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

/// Distinct payloads cycled through during the timed phase.
const PAYLOAD_POOL: usize = 1024;

fn main() {
    let config = BenchConfig::parse();
    if let Some(core) = config.core {
        pin_to_core(core);
    }
    match config.implementation {
        Implementation::Linked => benchmark(StringQueue::new(), &config),
        Implementation::VecDeque => benchmark(VecDeque::<String>::new(), &config),
    }
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct BenchConfig {
    /// number of strings to add to the queue before starting the timed run.
    #[arg(long, default_value_t = 100_000)]
    prefill: usize,
    /// length of every generated string.
    #[arg(long, default_value_t = 16)]
    string_len: usize,
    /// duration in seconds of the enqueue/dequeue phase.
    #[arg(long, default_value_t = 1)]
    duration: u64,
    /// queue implementation to benchmark.
    #[arg(long, value_enum, default_value_t = Implementation::Linked)]
    implementation: Implementation,
    /// core to pin the benchmark thread to.
    #[arg(long)]
    core: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Implementation {
    Linked,
    VecDeque,
}

fn pin_to_core(core: usize) {
    let Some(id) = core_affinity::get_core_ids()
        .unwrap_or_default()
        .into_iter()
        .find(|id| id.id == core)
    else {
        eprintln!("core {core} not available, running unpinned");
        return;
    };
    if !core_affinity::set_for_current(id) {
        eprintln!("failed to pin to core {core}, running unpinned");
    }
}

fn random_payloads(count: usize, len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn benchmark<Q: Fifo>(mut queue: Q, config: &BenchConfig) {
    let payloads = random_payloads(PAYLOAD_POOL, config.string_len);

    for i in 0..config.prefill {
        if let Err(err) = queue.enqueue(&payloads[i % payloads.len()]) {
            eprintln!("prefill stopped after {i} strings: {err}");
            break;
        }
    }

    let duration = Duration::from_secs(config.duration);
    let start = Instant::now();
    let mut enqueues = 0usize;
    let mut dequeues = 0usize;
    let mut failures = 0usize;
    loop {
        for _ in 0..PAYLOAD_POOL {
            match queue.enqueue(&payloads[enqueues % payloads.len()]) {
                Ok(()) => enqueues += 1,
                Err(_) => failures += 1,
            }
            if queue.dequeue().is_some() {
                dequeues += 1;
            }
        }
        if start.elapsed() >= duration {
            break;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    println!("throughput: {}", (enqueues + dequeues) as f64 / elapsed);
    println!("number of enqueues: {}", enqueues);
    println!("number of dequeues: {}", dequeues);
    if failures > 0 {
        println!("failed enqueues: {}", failures);
    }

    let len = queue.len();
    let start = Instant::now();
    queue.sort();
    println!("sort of {} strings: {:?}", len, start.elapsed());

    let start = Instant::now();
    queue.reverse();
    println!("reverse of {} strings: {:?}", len, start.elapsed());
}
