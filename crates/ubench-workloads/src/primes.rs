//! Sieve of Eratosthenes.
//!
//! Marks `0..=limit`, clearing multiples of each prime starting at `p * p`.
//! A marker only ever goes from `true` to `false`.

use tracing::debug;
use ubench_core::{SieveConfig, WorkloadError};

/// Results of one sieve workload run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SieveOutcome {
    /// Inclusive upper bound that was sieved.
    pub limit: usize,
    /// Number of primes in `0..=limit`.
    pub prime_count: usize,
    /// Largest prime `<= limit`, if any.
    pub largest_prime: Option<usize>,
}

/// Sieve `0..=limit`; `result[i]` is `true` iff `i` is prime.
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }

    let mut p = 2;
    while p * p <= limit {
        if is_prime[p] {
            let mut multiple = p * p;
            while multiple <= limit {
                is_prime[multiple] = false;
                multiple += p;
            }
        }
        p += 1;
    }
    is_prime
}

/// Number of primes in `0..=limit`.
pub fn count_primes(limit: usize) -> usize {
    sieve(limit).iter().filter(|&&p| p).count()
}

/// All primes in `0..=limit`, ascending.
pub fn primes_up_to(limit: usize) -> Vec<usize> {
    sieve(limit)
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| p.then_some(i))
        .collect()
}

/// Run the sieve workload for `config`.
pub fn run(config: &SieveConfig) -> Result<SieveOutcome, WorkloadError> {
    config.validate()?;
    debug!(limit = config.limit, "sieve workload starting");

    let marks = sieve(config.limit);
    let prime_count = marks.iter().filter(|&&p| p).count();
    let largest_prime = marks.iter().rposition(|&p| p);

    Ok(SieveOutcome {
        limit: config.limit,
        prime_count,
        largest_prime,
    })
}
