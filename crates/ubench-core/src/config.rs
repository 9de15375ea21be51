//! Workload configuration and validation.
//!
//! Every struct's [`Default`] is the reference workload the programs run.
//! The programs accept no arguments, so other values only ever come from
//! tests and Criterion benches that want the same kernels at another scale.

use crate::error::ConfigError;

/// Largest array accepted by [`ArrayConfig::validate`].
///
/// The sum of `0..MAX_ARRAY_SIZE` stays well inside `i64`.
pub const MAX_ARRAY_SIZE: usize = 1 << 31;

/// Largest index whose Fibonacci number fits in an `i64`.
pub const MAX_FIBONACCI_INDEX: u32 = 92;

/// Largest limit accepted by [`SieveConfig::validate`].
pub const MAX_SIEVE_LIMIT: usize = u32::MAX as usize;

// ── ArrayConfig ────────────────────────────────────────────────────

/// Configuration for the array fill/sum/reverse workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of elements. Default: 1 000 000.
    pub size: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self { size: 1_000_000 }
    }
}

impl ArrayConfig {
    /// Check that the array's sum cannot overflow `i64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size > MAX_ARRAY_SIZE {
            return Err(ConfigError::ArrayTooLarge {
                size: self.size,
                max: MAX_ARRAY_SIZE,
            });
        }
        Ok(())
    }
}

// ── FibonacciConfig ────────────────────────────────────────────────

/// Configuration for the recursive and iterative Fibonacci workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FibonacciConfig {
    /// Index computed with the naive recursive definition. Default: 35.
    pub recursive_n: u32,
    /// Index computed with the iterative loop. Default: 50.
    pub iterative_n: u32,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            recursive_n: 35,
            iterative_n: 50,
        }
    }
}

impl FibonacciConfig {
    /// Check both indices against [`MAX_FIBONACCI_INDEX`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, n) in [
            ("recursive_n", self.recursive_n),
            ("iterative_n", self.iterative_n),
        ] {
            if n > MAX_FIBONACCI_INDEX {
                return Err(ConfigError::FibonacciIndexTooLarge {
                    field,
                    n,
                    max: MAX_FIBONACCI_INDEX,
                });
            }
        }
        Ok(())
    }
}

// ── SieveConfig ────────────────────────────────────────────────────

/// Configuration for the Sieve of Eratosthenes workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SieveConfig {
    /// Inclusive upper bound of the sieve. Default: 1 000 000.
    pub limit: usize,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self { limit: 1_000_000 }
    }
}

impl SieveConfig {
    /// Check the limit against [`MAX_SIEVE_LIMIT`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit > MAX_SIEVE_LIMIT {
            return Err(ConfigError::SieveLimitTooLarge {
                limit: self.limit,
                max: MAX_SIEVE_LIMIT,
            });
        }
        Ok(())
    }
}

// ── StringConfig ───────────────────────────────────────────────────

/// Configuration for the string build and substring count workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringConfig {
    /// Text appended on every repetition. Default: `"Hello"`.
    pub unit: String,
    /// Number of appends. Default: 100 000.
    pub repetitions: usize,
    /// Substring counted in the built string. Default: `"llo"`.
    pub pattern: String,
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            unit: "Hello".to_string(),
            repetitions: 100_000,
            pattern: "llo".to_string(),
        }
    }
}

impl StringConfig {
    /// Check that the pattern is non-empty and the final length fits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        if self.expected_len().is_none() {
            return Err(ConfigError::StringTooLong {
                unit_len: self.unit.len(),
                repetitions: self.repetitions,
            });
        }
        Ok(())
    }

    /// Byte length of the built string, or `None` on overflow.
    pub fn expected_len(&self) -> Option<usize> {
        self.unit.len().checked_mul(self.repetitions)
    }
}

// ── BenchConfig ────────────────────────────────────────────────────

/// All four workload configurations together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchConfig {
    /// Array workload.
    pub array: ArrayConfig,
    /// Fibonacci workload.
    pub fibonacci: FibonacciConfig,
    /// Prime sieve workload.
    pub sieve: SieveConfig,
    /// String workload.
    pub strings: StringConfig,
}

impl BenchConfig {
    /// Validate every workload, stopping at the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.array.validate()?;
        self.fibonacci.validate()?;
        self.sieve.validate()?;
        self.strings.validate()?;
        Ok(())
    }
}
