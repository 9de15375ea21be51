//! Workload kernels for the ubench programs.
//!
//! Each module is one benchmark's computation and nothing else: a pure,
//! single-threaded function of its config from [`ubench_core::config`].
//! Timing and output belong to the programs in `ubench-bench`.
//!
//! - [`array`]: fill `0..N`, sum, reverse by index swap, sum again
//! - [`fibonacci`]: naive recursive and iterative Fibonacci
//! - [`primes`]: Sieve of Eratosthenes and prime counting
//! - [`strings`]: repeated append and non-overlapping substring counting

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod fibonacci;
pub mod primes;
pub mod strings;

pub use array::ArrayOutcome;
pub use fibonacci::{fib_iterative, fib_recursive, FibonacciOutcome};
pub use primes::{count_primes, sieve, SieveOutcome};
pub use strings::{count_occurrences, StringOutcome};
