//! SoloKV Stress Driver
//!
//! Hammers one engine with concurrent `set` calls from many threads and
//! reports how long the burst took to apply.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use solokv::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// SoloKV stress test
#[derive(Parser, Debug)]
#[command(name = "solokv-stress")]
#[command(about = "Concurrent SET stress test for SoloKV")]
#[command(version)]
struct Args {
    /// Number of writer threads
    #[arg(short, long, default_value = "10000")]
    threads: usize,

    /// Unique keys written by each thread
    #[arg(short, long, default_value = "1")]
    keys_per_thread: usize,

    /// TTL in seconds for every key (omit for no expiry)
    #[arg(long)]
    ttl: Option<u64>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,solokv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("SoloKV stress v{}", solokv::VERSION);
    tracing::info!("Threads: {}, keys per thread: {}", args.threads, args.keys_per_thread);

    let config = Config::builder()
        .executor_thread_name("solokv-stress-executor")
        .build();

    let engine = match Engine::open(config) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    let start = Instant::now();

    let mut handles = Vec::with_capacity(args.threads);
    for t in 0..args.threads {
        let engine = Arc::clone(&engine);
        let keys_per_thread = args.keys_per_thread;
        let ttl = args.ttl;
        handles.push(thread::spawn(move || -> solokv::Result<()> {
            for i in 0..keys_per_thread {
                let key = format!("key{}_{}", t, i);
                match ttl {
                    Some(secs) => engine.set_with_ttl(key, "value", secs)?,
                    None => engine.set(key, "value")?,
                }
            }
            Ok(())
        }));
    }

    let mut failed = 0usize;
    for handle in handles {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!("Writer failed: {}", e);
                failed += 1;
            }
            Err(_) => {
                tracing::warn!("Writer thread panicked");
                failed += 1;
            }
        }
    }

    let enqueued = start.elapsed();

    if let Err(e) = engine.flush() {
        tracing::error!("Flush failed: {}", e);
        std::process::exit(1);
    }
    let applied = start.elapsed();

    let keys = match engine.len() {
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!("Stats failed: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Handled {} concurrent SET requests: enqueued in {} ms, applied in {} ms, {} keys stored",
        args.threads * args.keys_per_thread,
        enqueued.as_millis(),
        applied.as_millis(),
        keys
    );

    match engine.shutdown() {
        Ok(Some(report)) => tracing::info!("Executor report: {:?}", report),
        Ok(None) => {}
        Err(e) => tracing::error!("Shutdown failed: {}", e),
    }

    if failed > 0 {
        tracing::error!("{} writer threads failed", failed);
        std::process::exit(1);
    }
}
