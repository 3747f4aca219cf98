//! Batch validation of candidate card numbers.
//!
//! A candidate is accepted when it is at least [`MIN_LENGTH`] characters long
//! and passes the Luhn check. Rejection is a verdict, not an error, so a batch
//! always yields exactly one verdict per input, in input order.

use crate::luhn;

/// Minimum number of characters a candidate must have to be accepted.
pub const MIN_LENGTH: usize = 13;

/// Batch validator with a configurable minimum-length policy.
///
/// # Example
///
/// ```
/// use cardcheck::BatchValidator;
///
/// let batch = BatchValidator::new();
/// let verdicts = batch.validate_all(&["4532015112830366", "123"]);
/// assert_eq!(verdicts, vec![true, false]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchValidator {
    min_length: usize,
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
        }
    }
}

impl BatchValidator {
    /// Creates a validator using the default minimum length.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum accepted length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Returns the minimum accepted length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Checks a single candidate.
    #[inline]
    pub fn accepts(&self, candidate: &str) -> bool {
        candidate.chars().count() >= self.min_length && luhn::is_valid(candidate)
    }

    /// Validates a batch, returning one verdict per input in the same order.
    pub fn validate_all<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<bool> {
        candidates.iter().map(|c| self.accepts(c.as_ref())).collect()
    }
}

/// Validates a batch with the default policy.
///
/// # Example
///
/// ```
/// use cardcheck::batch::validate_batch;
///
/// assert_eq!(validate_batch(&["4532015112830366", "123"]), vec![true, false]);
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(candidates: &[S]) -> Vec<bool> {
    BatchValidator::new().validate_all(candidates)
}
