//! Array fill, sum and in-place reversal.
//!
//! The workload fills `0..size`, sums it, reverses it by swapping index
//! `i` with `len - 1 - i`, and sums it again. Reversal is a permutation,
//! so both sums must agree.

use tracing::debug;
use ubench_core::{ArrayConfig, WorkloadError};

/// Results of one array workload run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayOutcome {
    /// Number of elements.
    pub len: usize,
    /// Sum before reversal.
    pub sum_before: i64,
    /// Sum after reversal.
    pub sum_after: i64,
    /// First element after reversal.
    pub first: Option<i64>,
    /// Last element after reversal.
    pub last: Option<i64>,
}

/// Build a vector holding `0, 1, .., size - 1`.
pub fn fill(size: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(size);
    for i in 0..size {
        values.push(i as i64);
    }
    values
}

/// Sum all elements with checked addition.
pub fn sum(values: &[i64]) -> Result<i64, WorkloadError> {
    let mut total: i64 = 0;
    for &v in values {
        total = total.checked_add(v).ok_or(WorkloadError::Overflow {
            operation: "array_sum",
            n: values.len() as u64,
        })?;
    }
    Ok(total)
}

/// Reverse `values` in place by pairwise index swap.
pub fn reverse_in_place(values: &mut [i64]) {
    let len = values.len();
    for i in 0..len / 2 {
        values.swap(i, len - 1 - i);
    }
}

/// Run the full array workload for `config`.
pub fn run(config: &ArrayConfig) -> Result<ArrayOutcome, WorkloadError> {
    config.validate()?;
    debug!(size = config.size, "array workload starting");

    let mut values = fill(config.size);
    let sum_before = sum(&values)?;
    reverse_in_place(&mut values);
    let sum_after = sum(&values)?;

    debug_assert_eq!(values.len(), config.size);
    Ok(ArrayOutcome {
        len: values.len(),
        sum_before,
        sum_after,
        first: values.first().copied(),
        last: values.last().copied(),
    })
}
