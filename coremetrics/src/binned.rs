//! Binned ROC curve: a fixed number of evenly spaced thresholds.
//!
//! The curve always has `buckets + 1` points, whatever the score
//! distribution. Levels run from the top of the scale down to the bottom:
//!
//! ```text
//! t_b = hi - (b / buckets) * (hi - lo)      b = 0 ..= buckets
//! ```
//!
//! Level 0 is the strict boundary `(0, 0)` and level `buckets` is the
//! permissive boundary `(1, 1)`. Each interior level reports the positives
//! and negatives scoring at or above it. The scores are sorted once, highest
//! first, and a single cursor walks down them as the level drops, so the
//! whole curve costs one sort plus `O(n + buckets)`.
//!
//! Each level is rounded to `f32` once. That value is both the recorded
//! threshold and the cutoff, so a score equal to a point's threshold is
//! always counted at that point.
//!
//! The scale is `[0, 1]` when clamping (scores are clamped before the
//! comparison), otherwise the range of the finite observed scores.

use crate::assemble::OutputBuffer;
use crate::curve::{ClassTotals, RocPoint, RocSummary, Sample, clamp_unit};
use crate::error::Result;
use crate::validate;

/// The closed score range binned thresholds are spread over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreScale {
    /// Bottom of the scale (most permissive level).
    pub lo: f64,
    /// Top of the scale (strictest level).
    pub hi: f64,
}

impl ScoreScale {
    /// The unit interval.
    pub const UNIT: Self = Self { lo: 0.0, hi: 1.0 };

    /// Picks the scale for a call: the unit interval when clamping, else the
    /// finite score range. Falls back to the unit interval if no score is
    /// finite.
    pub fn for_scores(scores: &[f32], clamp01: bool) -> Self {
        if clamp01 {
            return Self::UNIT;
        }
        scores
            .iter()
            .copied()
            .filter(|s| s.is_finite())
            .fold(None, |range: Option<(f32, f32)>, s| match range {
                None => Some((s, s)),
                Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
            })
            .map_or(Self::UNIT, |(lo, hi)| Self {
                lo: f64::from(lo),
                hi: f64::from(hi),
            })
    }

    /// Threshold level `b` of `buckets`, counted from the top.
    #[allow(clippy::cast_precision_loss)] // Bucket counts fit an i32
    pub fn level(&self, b: usize, buckets: usize) -> f64 {
        if b >= buckets {
            return self.lo;
        }
        self.hi - (b as f64 / buckets as f64) * (self.hi - self.lo)
    }
}

/// Computes a binned ROC curve into `out` and integrates its AUC.
///
/// Always writes exactly `buckets + 1` points. Any non-zero label byte is a
/// positive.
///
/// # Errors
///
/// Returns [`crate::error::ComputeError::InvalidCount`] for empty or
/// mismatched inputs, [`crate::error::ComputeError::InvalidBucketCount`] if
/// `buckets <= 0`, and
/// [`crate::error::ComputeError::InsufficientOutputCapacity`] if
/// `out.len() < buckets + 1`. `out` is not modified on error.
///
/// # Examples
///
/// ```rust
/// use coremetrics::{RocPoint, compute_roc_binned};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let scores = [0.1, 0.4, 0.35, 0.8];
/// let labels = [0, 0, 1, 1];
/// let mut out = [RocPoint::default(); 11];
///
/// let summary = compute_roc_binned(&scores, &labels, 10, &mut out, true)?;
/// assert_eq!(summary.points_written, 11);
/// assert_eq!(out[0].threshold, 1.0);
/// assert_eq!(out[10].threshold, 0.0);
/// # Ok(())
/// # }
/// ```
#[allow(clippy::cast_possible_truncation)] // Levels lie within the f32 score range
pub fn compute_roc_binned(
    scores: &[f32],
    labels: &[u8],
    buckets: i32,
    out: &mut [RocPoint],
    clamp01: bool,
) -> Result<RocSummary> {
    let points = validate::validate_binned(scores, labels, buckets, out.len())?;
    let buckets = points - 1;

    let totals = ClassTotals::count(labels);
    let scale = ScoreScale::for_scores(scores, clamp01);
    let ranked = ranked_samples(scores, labels, clamp01);

    let mut tp = 0u64;
    let mut fp = 0u64;
    let mut cursor = 0;

    let mut out = OutputBuffer::new(out);
    for b in 0..=buckets {
        let level = scale.level(b, buckets);
        let threshold = level as f32;

        while let Some(sample) = ranked.get(cursor) {
            if sample.score < threshold {
                break;
            }
            if sample.label {
                tp += 1;
            } else {
                fp += 1;
            }
            cursor += 1;
        }

        let point = if b == 0 {
            RocPoint::origin(threshold)
        } else if b == buckets {
            RocPoint::terminus(threshold)
        } else {
            RocPoint {
                fpr: totals.fpr(fp),
                tpr: totals.tpr(tp),
                threshold,
            }
        };
        out.push(point)?;
    }

    Ok(out.finish(totals))
}

/// Comparable samples sorted highest score first. NaN never clears a level,
/// so it is left out.
fn ranked_samples(scores: &[f32], labels: &[u8], clamp01: bool) -> Vec<Sample> {
    let mut ranked: Vec<Sample> = scores
        .iter()
        .zip(labels)
        .filter(|(score, _)| !score.is_nan())
        .map(|(&score, &label)| Sample {
            score: if clamp01 { clamp_unit(score) } else { score },
            label: label != 0,
        })
        .collect();
    ranked.sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
