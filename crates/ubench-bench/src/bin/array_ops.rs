//! Array benchmark: fill 1M integers, sum, reverse in place, sum again.

use std::error::Error;
use std::time::Instant;

use tracing::info;
use ubench_bench::{format_elapsed, reference_profile};
use ubench_workloads::array;

fn main() -> Result<(), Box<dyn Error>> {
    ubench_core::logging::init();
    let config = reference_profile().array;

    let start = Instant::now();
    let outcome = array::run(&config)?;
    let elapsed = start.elapsed();

    println!("Array size: {}", outcome.len);
    println!("Sum before reversal: {}", outcome.sum_before);
    println!("Sum after reversal: {}", outcome.sum_after);
    if let (Some(first), Some(last)) = (outcome.first, outcome.last) {
        println!("First/last after reversal: {first}/{last}");
    }
    println!("{}", format_elapsed(elapsed));

    info!(
        benchmark = "array_ops",
        elapsed_us = elapsed.as_micros() as u64,
        "benchmark finished"
    );
    Ok(())
}
