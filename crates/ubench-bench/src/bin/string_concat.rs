//! String benchmark: append "Hello" 100K times, count "llo".

use std::error::Error;
use std::time::Instant;

use tracing::info;
use ubench_bench::{format_elapsed, reference_profile};
use ubench_workloads::strings;

fn main() -> Result<(), Box<dyn Error>> {
    ubench_core::logging::init();
    let config = reference_profile().strings;

    let start = Instant::now();
    let outcome = strings::run(&config)?;
    let elapsed = start.elapsed();

    println!("String length: {}", outcome.length);
    println!("Occurrences of '{}': {}", config.pattern, outcome.occurrences);
    println!("{}", format_elapsed(elapsed));

    info!(
        benchmark = "string_concat",
        elapsed_us = elapsed.as_micros() as u64,
        "benchmark finished"
    );
    Ok(())
}
