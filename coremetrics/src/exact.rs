//! Exact ROC curve: one point per distinct score.
//!
//! # Algorithm
//!
//! 1. Copy the samples and sort them by score, highest first.
//! 2. Sweep the sorted run. All samples sharing a score form one threshold
//!    step; after each step emit `(FP / N, TP / P, score)`.
//! 3. Bracket the sweep with the boundary points `(0, 0, +inf)` and
//!    `(1, 1, -inf)`. The closing point is skipped when the sweep already
//!    ended on `(1, 1)`.
//!
//! ```text
//!  scores  0.8  0.4  0.35  0.1         point
//!  labels   P    N    P     N
//!          (0,0,+inf)
//!           ──► (0, .5, 0.8)
//!                ──► (.5, .5, 0.4)
//!                     ──► (.5, 1, 0.35)
//!                          ──► (1, 1, 0.1)     AUC = 0.75
//! ```
//!
//! Splitting a tie across two points would add a vertex that no threshold can
//! realise, so ties are always consumed as a unit.
//!
//! With clamping on, the recorded threshold is the clamped score. Ranking
//! uses the raw score, which clamping never reorders, and ties are grouped on
//! the recorded threshold so out-of-range scores merge into the `0` and `1`
//! groups. No two sweep points share a threshold.

use crate::assemble::OutputBuffer;
use crate::curve::{ClassTotals, RocPoint, RocSummary, Sample, clamp_unit, rank_key};
use crate::error::Result;
use crate::validate;

/// Computes the exact ROC curve into `out` and integrates its AUC.
///
/// Writes between 2 and `n + 2` points; the count is returned in the
/// summary. Any non-zero label byte is a positive.
///
/// # Errors
///
/// Returns [`crate::error::ComputeError::InvalidCount`] for empty or
/// mismatched inputs and
/// [`crate::error::ComputeError::InsufficientOutputCapacity`] if
/// `out.len() < n + 2`. `out` is not modified on error.
///
/// # Examples
///
/// ```rust
/// use coremetrics::{RocPoint, compute_roc_exact};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let scores = [0.1, 0.4, 0.35, 0.8];
/// let labels = [0, 0, 1, 1];
/// let mut out = [RocPoint::default(); 6];
///
/// let summary = compute_roc_exact(&scores, &labels, &mut out, false)?;
/// assert_eq!(summary.points_written, 5);
/// assert!((summary.auc - 0.75).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
pub fn compute_roc_exact(
    scores: &[f32],
    labels: &[u8],
    out: &mut [RocPoint],
    clamp01: bool,
) -> Result<RocSummary> {
    validate::validate_exact(scores, labels, out.len())?;

    let totals = ClassTotals::count(labels);
    let samples = sorted_samples(scores, labels);

    let mut out = OutputBuffer::new(out);
    out.push(RocPoint::origin(f32::INFINITY))?;

    let recorded = |score: f32| if clamp01 { clamp_unit(score) } else { score };

    let mut tp = 0u64;
    let mut fp = 0u64;
    for group in samples.chunk_by(|a, b| same_rank(recorded(a.score), recorded(b.score))) {
        for sample in group {
            if sample.label {
                tp += 1;
            } else {
                fp += 1;
            }
        }

        let score = group[0].score;
        out.push(RocPoint {
            fpr: totals.fpr(fp),
            tpr: totals.tpr(tp),
            threshold: recorded(score),
        })?;
    }

    if !out.last().is_some_and(RocPoint::is_terminus) {
        out.push(RocPoint::terminus(f32::NEG_INFINITY))?;
    }

    Ok(out.finish(totals))
}

/// Samples sorted by descending rank key.
fn sorted_samples(scores: &[f32], labels: &[u8]) -> Vec<Sample> {
    let mut samples: Vec<Sample> = scores
        .iter()
        .zip(labels)
        .map(|(&score, &label)| Sample {
            score,
            label: label != 0,
        })
        .collect();
    samples.sort_unstable_by(|a, b| rank_key(b.score).total_cmp(&rank_key(a.score)));
    samples
}

#[inline]
fn same_rank(a: f32, b: f32) -> bool {
    rank_key(a).total_cmp(&rank_key(b)).is_eq()
}
