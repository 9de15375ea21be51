//! Fibonacci benchmark: naive recursive fib(35) and iterative fib(50).

use std::error::Error;
use std::time::Instant;

use tracing::info;
use ubench_bench::{format_elapsed, reference_profile};
use ubench_workloads::fibonacci;

fn main() -> Result<(), Box<dyn Error>> {
    ubench_core::logging::init();
    let config = reference_profile().fibonacci;

    let start = Instant::now();
    let outcome = fibonacci::run(&config)?;
    let elapsed = start.elapsed();

    println!("Recursive fib({}) = {}", outcome.recursive_n, outcome.recursive);
    println!("Iterative fib({}) = {}", outcome.iterative_n, outcome.iterative);
    println!("{}", format_elapsed(elapsed));

    info!(
        benchmark = "fibonacci",
        elapsed_us = elapsed.as_micros() as u64,
        "benchmark finished"
    );
    Ok(())
}
