//! String building by repeated append, then substring counting.

use tracing::debug;
use ubench_core::{StringConfig, WorkloadError};

/// Results of one string workload run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringOutcome {
    /// Byte length of the built string.
    pub length: usize,
    /// Non-overlapping occurrences of the pattern.
    pub occurrences: usize,
}

/// Append `unit` to an empty string `repetitions` times.
///
/// The string starts unallocated so the append path includes regrowth.
pub fn build(unit: &str, repetitions: usize) -> String {
    let mut out = String::new();
    for _ in 0..repetitions {
        out.push_str(unit);
    }
    out
}

/// Count non-overlapping occurrences of `pattern` in `haystack`.
///
/// Scans left to right; after each match the cursor skips the whole match.
pub fn count_occurrences(haystack: &str, pattern: &str) -> Result<usize, WorkloadError> {
    if pattern.is_empty() {
        return Err(WorkloadError::EmptyPattern);
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = haystack[pos..].find(pattern) {
        count += 1;
        pos += offset + pattern.len();
    }
    Ok(count)
}

/// Run the string workload for `config`.
pub fn run(config: &StringConfig) -> Result<StringOutcome, WorkloadError> {
    config.validate()?;
    debug!(
        unit = %config.unit,
        repetitions = config.repetitions,
        pattern = %config.pattern,
        "string workload starting"
    );

    let built = build(&config.unit, config.repetitions);
    let occurrences = count_occurrences(&built, &config.pattern)?;

    debug_assert_eq!(Some(built.len()), config.expected_len());
    Ok(StringOutcome {
        length: built.len(),
        occurrences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn build_repeats_unit() {
        assert_eq!(build("ab", 3), "ababab");
        assert_eq!(build("ab", 0), "");
        assert_eq!(build("", 5), "");
    }

    #[test]
    fn count_basic() {
        assert_eq!(count_occurrences("HelloHello", "llo").unwrap(), 2);
        assert_eq!(count_occurrences("Hello", "xyz").unwrap(), 0);
        assert_eq!(count_occurrences("", "a").unwrap(), 0);
    }

    #[test]
    fn count_does_not_overlap() {
        assert_eq!(count_occurrences("aaaa", "aa").unwrap(), 2);
        assert_eq!(count_occurrences("aaa", "aa").unwrap(), 1);
    }

    #[test]
    fn count_pattern_longer_than_haystack() {
        assert_eq!(count_occurrences("ab", "abc").unwrap(), 0);
    }

    #[test]
    fn count_multibyte_text() {
        assert_eq!(count_occurrences("żółw żółw", "ół").unwrap(), 2);
    }

    #[test]
    fn empty_pattern_is_an_error() {
        assert_eq!(
            count_occurrences("abc", ""),
            Err(WorkloadError::EmptyPattern)
        );
    }

    #[test]
    fn run_small_config() {
        let outcome = run(&StringConfig {
            unit: "Hello".to_string(),
            repetitions: 10,
            pattern: "llo".to_string(),
        })
        .unwrap();
        assert_eq!(outcome.length, 50);
        assert_eq!(outcome.occurrences, 10);
    }

    #[test]
    fn run_rejects_empty_pattern() {
        let cfg = StringConfig {
            pattern: String::new(),
            ..StringConfig::default()
        };
        assert!(matches!(run(&cfg), Err(WorkloadError::Config(_))));
    }

    proptest! {
        #[test]
        fn length_is_unit_times_repetitions(unit in "[a-zA-Z]{0,10}", reps in 0usize..500) {
            prop_assert_eq!(build(&unit, reps).len(), unit.len() * reps);
        }

        #[test]
        fn occurrences_scale_linearly(reps in 0usize..2_000) {
            let built = build("Hello", reps);
            prop_assert_eq!(count_occurrences(&built, "llo").unwrap(), reps);
            prop_assert_eq!(count_occurrences(&built, "Hello").unwrap(), reps);
        }
    }
}
