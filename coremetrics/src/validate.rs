//! Input validation for both curve modes.
//!
//! Every check here runs before any computation or buffer write, so a
//! rejected call costs nothing and leaves the caller's output untouched.
//! Checks run in a fixed order: presence, sample count, bucket count, output
//! capacity.

use crate::error::{ComputeError, Result};

/// Unwraps an optional input, failing with [`ComputeError::NullInput`].
///
/// # Errors
///
/// Returns [`ComputeError::NullInput`] if `input` is `None`.
pub fn require<'a, T>(input: Option<&'a [T]>, name: &'static str) -> Result<&'a [T]> {
    input.ok_or_else(|| ComputeError::NullInput { input: name }.into())
}

/// Checks that `scores` and `labels` are non-empty and of equal length.
///
/// Returns the sample count `n`.
///
/// # Errors
///
/// Returns [`ComputeError::InvalidCount`] on an empty or mismatched pair.
pub fn sample_count(scores: &[f32], labels: &[u8]) -> Result<usize> {
    if scores.is_empty() || scores.len() != labels.len() {
        return Err(ComputeError::InvalidCount {
            scores: scores.len(),
            labels: labels.len(),
        }
        .into());
    }
    Ok(scores.len())
}

/// Validates an exact-mode call and returns the worst-case point count.
///
/// # Errors
///
/// Returns [`ComputeError::InvalidCount`] or
/// [`ComputeError::InsufficientOutputCapacity`].
pub fn validate_exact(scores: &[f32], labels: &[u8], capacity: usize) -> Result<usize> {
    let n = sample_count(scores, labels)?;
    let required = n.saturating_add(2);
    check_capacity(required, capacity)?;
    Ok(required)
}

/// Validates a binned-mode call and returns the exact point count.
///
/// # Errors
///
/// Returns [`ComputeError::InvalidCount`],
/// [`ComputeError::InvalidBucketCount`] or
/// [`ComputeError::InsufficientOutputCapacity`].
pub fn validate_binned(
    scores: &[f32],
    labels: &[u8],
    buckets: i32,
    capacity: usize,
) -> Result<usize> {
    sample_count(scores, labels)?;
    let required = binned_point_count(buckets)?;
    check_capacity(required, capacity)?;
    Ok(required)
}

/// Number of points a binned curve with `buckets` buckets emits.
///
/// # Errors
///
/// Returns [`ComputeError::InvalidBucketCount`] if `buckets <= 0`.
pub fn binned_point_count(buckets: i32) -> Result<usize> {
    match usize::try_from(buckets) {
        Ok(b) if b > 0 => Ok(b + 1),
        _ => Err(ComputeError::InvalidBucketCount { buckets }.into()),
    }
}

fn check_capacity(required: usize, capacity: usize) -> Result<()> {
    if capacity < required {
        return Err(ComputeError::InsufficientOutputCapacity { required, capacity }.into());
    }
    Ok(())
}
