//! Error types for the ubench workloads.
//!
//! Split by when the failure is detected: [`ConfigError`] before a
//! workload starts, [`WorkloadError`] while it runs.

use std::error::Error;
use std::fmt;

/// Errors detected by the `validate()` methods in [`crate::config`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Array size exceeds [`MAX_ARRAY_SIZE`](crate::MAX_ARRAY_SIZE).
    ArrayTooLarge {
        /// The configured size.
        size: usize,
        /// The largest accepted size.
        max: usize,
    },
    /// A Fibonacci index exceeds
    /// [`MAX_FIBONACCI_INDEX`](crate::MAX_FIBONACCI_INDEX).
    FibonacciIndexTooLarge {
        /// Which config field carried the index.
        field: &'static str,
        /// The configured index.
        n: u32,
        /// The largest accepted index.
        max: u32,
    },
    /// Sieve limit exceeds [`MAX_SIEVE_LIMIT`](crate::MAX_SIEVE_LIMIT).
    SieveLimitTooLarge {
        /// The configured limit.
        limit: usize,
        /// The largest accepted limit.
        max: usize,
    },
    /// The substring pattern is empty.
    EmptyPattern,
    /// `unit.len() * repetitions` does not fit in `usize`.
    StringTooLong {
        /// Length of the repeated unit, in bytes.
        unit_len: usize,
        /// Configured repetition count.
        repetitions: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArrayTooLarge { size, max } => {
                write!(f, "array size {size} exceeds maximum of {max}")
            }
            Self::FibonacciIndexTooLarge { field, n, max } => {
                write!(f, "{field} = {n} exceeds maximum of {max}")
            }
            Self::SieveLimitTooLarge { limit, max } => {
                write!(f, "sieve limit {limit} exceeds maximum of {max}")
            }
            Self::EmptyPattern => write!(f, "search pattern must not be empty"),
            Self::StringTooLong {
                unit_len,
                repetitions,
            } => write!(
                f,
                "{repetitions} repetitions of a {unit_len}-byte unit overflow usize"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Errors raised while a workload runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkloadError {
    /// The workload's configuration failed validation.
    Config(ConfigError),
    /// Checked integer arithmetic overflowed.
    Overflow {
        /// The operation that overflowed, e.g. `"fib_iterative"`.
        operation: &'static str,
        /// The input size or index at which it overflowed.
        n: u64,
    },
    /// A substring search was given an empty pattern.
    EmptyPattern,
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Overflow { operation, n } => {
                write!(f, "{operation}: integer overflow at n = {n}")
            }
            Self::EmptyPattern => write!(f, "cannot count occurrences of an empty pattern"),
        }
    }
}

impl Error for WorkloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for WorkloadError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = ConfigError::FibonacciIndexTooLarge {
            field: "iterative_n",
            n: 100,
            max: 92,
        };
        assert_eq!(e.to_string(), "iterative_n = 100 exceeds maximum of 92");
    }

    #[test]
    fn overflow_display_names_operation() {
        let e = WorkloadError::Overflow {
            operation: "fib_iterative",
            n: 93,
        };
        assert_eq!(e.to_string(), "fib_iterative: integer overflow at n = 93");
    }

    #[test]
    fn config_error_converts_and_keeps_source() {
        let e: WorkloadError = ConfigError::EmptyPattern.into();
        assert_eq!(e, WorkloadError::Config(ConfigError::EmptyPattern));
        let source = e.source().expect("config errors carry a source");
        assert_eq!(source.to_string(), "search pattern must not be empty");
    }

    #[test]
    fn leaf_errors_have_no_source() {
        assert!(WorkloadError::EmptyPattern.source().is_none());
    }
}
