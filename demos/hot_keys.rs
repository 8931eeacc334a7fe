//! Hot keys under churn.
//!
//! Streams a mix of a few hot keys and many one-off keys through a small
//! buffer, then reports which hot keys survived and how the slots were
//! contended. Compares probabilistic eviction against plain overwrite.
//!
//! Run with: `cargo run --example hot_keys`
//! With options: `cargo run --example hot_keys -- --buckets 64 --stream 100000 -v`

use std::time::Instant;

use clap::Parser;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use unordered_buffer::config::BufferConfig;
use unordered_buffer::policy::{Decay, Eviction};
use unordered_buffer::UnorderedBuffer;

#[derive(Parser, Debug)]
#[command(name = "hot_keys")]
#[command(about = "Show frequency-biased retention in an unordered buffer")]
struct Args {
    /// Number of buckets
    #[arg(short, long, default_value_t = 16)]
    buckets: usize,

    /// Number of hot keys
    #[arg(long, default_value_t = 3)]
    hot: u64,

    /// Length of the key stream
    #[arg(short, long, default_value_t = 10_000)]
    stream: usize,

    /// Fraction of the stream taken by hot keys
    #[arg(long, default_value_t = 0.3)]
    hot_fraction: f64,

    /// Seed for the key stream and the eviction draws
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log buffer internals (rehash, clear, collision decisions)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = Instant::now();

    let stream = key_stream(&args);
    println!("stream: {} keys, {} hot", stream.len(), args.hot);

    for eviction in [
        Eviction::Probabilistic(Decay::Binary),
        Eviction::Probabilistic(Decay::Exponential),
        Eviction::Overwrite,
    ] {
        println!("──────────────────────────────────");
        println!("eviction = {:?}", eviction);

        let config = BufferConfig {
            buckets: args.buckets,
            eviction,
            seed: Some(args.seed),
        };
        let mut buffer = UnorderedBuffer::<u64, usize>::with_config(&config);
        for (i, &key) in stream.iter().enumerate() {
            buffer.insert(key, i);
        }

        let survivors: Vec<u64> = (0..args.hot).filter(|k| buffer.contains_key(k)).collect();
        println!("hot keys retained: {}/{} {:?}", survivors.len(), args.hot, survivors);
        for k in &survivors {
            println!("  key {} priority = {:?}", k, buffer.priority(k));
        }

        let stats = buffer.stats();
        println!("len = {} / {}", buffer.len(), buffer.bucket_count());
        println!("stats = {:?}", stats);
        println!("hit ratio = {:.3}", stats.hit_ratio());

        // Shrinking forces collisions between survivors.
        buffer.rehash((args.buckets / 2).max(1));
        println!("after rehash to {}: len = {}", buffer.bucket_count(), buffer.len());
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}

/// Hot keys are `0..hot`; cold keys are drawn from a large range and almost never repeat.
fn key_stream(args: &Args) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    (0..args.stream)
        .map(|_| {
            if args.hot > 0 && rng.random_bool(args.hot_fraction) {
                rng.random_range(0..args.hot)
            } else {
                rng.random_range(args.hot..u64::MAX)
            }
        })
        .collect()
}
