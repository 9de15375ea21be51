//! Naive recursive and iterative Fibonacci.
//!
//! `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n - 1) + fib(n - 2)`.
//! The recursive form is exponential in `n` and exists to load the call
//! path; the iterative form is linear and uses checked addition.

use tracing::debug;
use ubench_core::{FibonacciConfig, WorkloadError, MAX_FIBONACCI_INDEX};

/// Results of one Fibonacci workload run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FibonacciOutcome {
    /// Index passed to [`fib_recursive`].
    pub recursive_n: u32,
    /// `fib(recursive_n)`.
    pub recursive: i64,
    /// Index passed to [`fib_iterative`].
    pub iterative_n: u32,
    /// `fib(iterative_n)`.
    pub iterative: i64,
}

/// Compute `fib(n)` with the doubly recursive definition.
///
/// Indices above [`MAX_FIBONACCI_INDEX`] are rejected up front, since
/// their value cannot be represented.
pub fn fib_recursive(n: u32) -> Result<i64, WorkloadError> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(WorkloadError::Overflow {
            operation: "fib_recursive",
            n: u64::from(n),
        });
    }
    Ok(naive(n))
}

fn naive(n: u32) -> i64 {
    if n < 2 {
        return i64::from(n);
    }
    naive(n - 1) + naive(n - 2)
}

/// Compute `fib(n)` with a two-accumulator loop.
pub fn fib_iterative(n: u32) -> Result<i64, WorkloadError> {
    if n < 2 {
        return Ok(i64::from(n));
    }
    let (mut prev, mut curr) = (0i64, 1i64);
    for _ in 2..=n {
        let next = prev.checked_add(curr).ok_or(WorkloadError::Overflow {
            operation: "fib_iterative",
            n: u64::from(n),
        })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Run both Fibonacci variants for `config`.
pub fn run(config: &FibonacciConfig) -> Result<FibonacciOutcome, WorkloadError> {
    config.validate()?;
    debug!(
        recursive_n = config.recursive_n,
        iterative_n = config.iterative_n,
        "fibonacci workload starting"
    );

    let recursive = fib_recursive(config.recursive_n)?;
    let iterative = fib_iterative(config.iterative_n)?;

    Ok(FibonacciOutcome {
        recursive_n: config.recursive_n,
        recursive,
        iterative_n: config.iterative_n,
        iterative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn seeds() {
        assert_eq!(fib_recursive(0).unwrap(), 0);
        assert_eq!(fib_recursive(1).unwrap(), 1);
        assert_eq!(fib_iterative(0).unwrap(), 0);
        assert_eq!(fib_iterative(1).unwrap(), 1);
    }

    #[test]
    fn first_terms() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(fib_iterative(n as u32).unwrap(), want, "fib({n})");
        }
    }

    #[test]
    fn variants_agree_at_ten() {
        assert_eq!(fib_recursive(10).unwrap(), 55);
        assert_eq!(fib_iterative(10).unwrap(), 55);
    }

    #[test]
    fn largest_representable_index() {
        assert_eq!(
            fib_iterative(MAX_FIBONACCI_INDEX).unwrap(),
            7_540_113_804_746_346_429
        );
    }

    #[test]
    fn iterative_overflow_past_max_index() {
        assert_eq!(
            fib_iterative(MAX_FIBONACCI_INDEX + 1),
            Err(WorkloadError::Overflow {
                operation: "fib_iterative",
                n: 93
            })
        );
    }

    #[test]
    fn recursive_rejects_unrepresentable_index() {
        assert!(matches!(
            fib_recursive(MAX_FIBONACCI_INDEX + 1),
            Err(WorkloadError::Overflow {
                operation: "fib_recursive",
                ..
            })
        ));
    }

    #[test]
    fn run_rejects_invalid_config() {
        let cfg = FibonacciConfig {
            recursive_n: 200,
            iterative_n: 10,
        };
        assert!(matches!(run(&cfg), Err(WorkloadError::Config(_))));
    }

    #[test]
    fn run_small_indices() {
        let outcome = run(&FibonacciConfig {
            recursive_n: 20,
            iterative_n: 30,
        })
        .unwrap();
        assert_eq!(outcome.recursive, 6_765);
        assert_eq!(outcome.iterative, 832_040);
    }

    proptest! {
        #[test]
        fn iterative_satisfies_recurrence(n in 2u32..=MAX_FIBONACCI_INDEX) {
            let f = fib_iterative(n).unwrap();
            let f1 = fib_iterative(n - 1).unwrap();
            let f2 = fib_iterative(n - 2).unwrap();
            prop_assert_eq!(f, f1 + f2);
        }

        #[test]
        fn recursive_and_iterative_agree(n in 0u32..=20) {
            prop_assert_eq!(fib_recursive(n).unwrap(), fib_iterative(n).unwrap());
        }
    }
}
