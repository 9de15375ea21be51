//! Prime benchmark: Sieve of Eratosthenes up to 1M.

use std::error::Error;
use std::time::Instant;

use tracing::info;
use ubench_bench::{format_elapsed, reference_profile};
use ubench_workloads::primes;

fn main() -> Result<(), Box<dyn Error>> {
    ubench_core::logging::init();
    let config = reference_profile().sieve;

    let start = Instant::now();
    let outcome = primes::run(&config)?;
    let elapsed = start.elapsed();

    println!("Primes up to {}: {}", outcome.limit, outcome.prime_count);
    if let Some(largest) = outcome.largest_prime {
        println!("Largest prime: {largest}");
    }
    println!("{}", format_elapsed(elapsed));

    info!(
        benchmark = "prime_sieve",
        elapsed_us = elapsed.as_micros() as u64,
        "benchmark finished"
    );
    Ok(())
}
