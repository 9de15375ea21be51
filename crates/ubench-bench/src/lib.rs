//! Workload profiles and output helpers for the ubench programs.
//!
//! - [`reference_profile`]: the fixed workloads the four programs run
//! - [`smoke_profile`]: the same kernels at a size Criterion can iterate quickly
//! - [`format_elapsed`]: the elapsed-time line every program prints last

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use ubench_core::{ArrayConfig, BenchConfig, FibonacciConfig, SieveConfig, StringConfig};

/// Reference workloads: 1M-element array, fib(35) and fib(50), primes up
/// to 1M, and "Hello" appended 100K times.
pub fn reference_profile() -> BenchConfig {
    BenchConfig::default()
}

/// Small workloads for quick benchmark iterations.
///
/// Same kernels as [`reference_profile`]: array, sieve and string sizes
/// are 100x smaller and the recursive Fibonacci drops to fib(20).
pub fn smoke_profile() -> BenchConfig {
    BenchConfig {
        array: ArrayConfig { size: 10_000 },
        fibonacci: FibonacciConfig {
            recursive_n: 20,
            iterative_n: 50,
        },
        sieve: SieveConfig { limit: 10_000 },
        strings: StringConfig {
            repetitions: 1_000,
            ..StringConfig::default()
        },
    }
}

/// Format a wall-clock duration as `Elapsed time: <ms> ms`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Elapsed time: {:.3} ms", elapsed.as_secs_f64() * 1_000.0)
}
