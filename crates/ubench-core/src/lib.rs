//! Core types for the ubench micro-benchmark programs.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-workload configuration structs, the error types shared by the
//! workload kernels, and the logging setup used by every program.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    ArrayConfig, BenchConfig, FibonacciConfig, SieveConfig, StringConfig, MAX_ARRAY_SIZE,
    MAX_FIBONACCI_INDEX, MAX_SIEVE_LIMIT,
};
pub use error::{ConfigError, WorkloadError};
