//! Data model shared by the exact and binned curve computers.
//!
//! A curve is an ordered run of [`RocPoint`]s swept from the strictest
//! threshold (nothing classified positive) to the most permissive one
//! (everything classified positive), so both rates are non-decreasing along
//! the sequence.

use serde::Serialize;

/// One operating point on a ROC curve.
///
/// The layout is `#[repr(C)]` with fields in declaration order so a buffer of
/// points can be handed across the C ABI unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RocPoint {
    /// False-positive rate in `[0, 1]`.
    pub fpr: f64,
    /// True-positive rate in `[0, 1]`.
    pub tpr: f64,
    /// Score cutoff: samples scoring at or above it are classified positive.
    pub threshold: f32,
}

impl RocPoint {
    /// Strict boundary point: nothing is classified positive.
    pub const fn origin(threshold: f32) -> Self {
        Self {
            fpr: 0.0,
            tpr: 0.0,
            threshold,
        }
    }

    /// Permissive boundary point: everything is classified positive.
    pub const fn terminus(threshold: f32) -> Self {
        Self {
            fpr: 1.0,
            tpr: 1.0,
            threshold,
        }
    }

    /// Returns `true` if this point sits at `(1, 1)`.
    #[allow(clippy::float_cmp)] // Rates of exactly 1.0 come from count == total
    pub fn is_terminus(&self) -> bool {
        self.fpr == 1.0 && self.tpr == 1.0
    }
}

/// A single scored sample. Any non-zero label byte is a positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Classifier score.
    pub score: f32,
    /// Ground truth.
    pub label: bool,
}

/// What a successful compute call reports back to its caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocSummary {
    /// Number of leading buffer slots holding authoritative points.
    pub points_written: usize,
    /// Trapezoidal area under the written curve.
    pub auc: f64,
}

/// Positive and negative counts over a label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassTotals {
    /// Labels with a non-zero byte.
    pub positives: u64,
    /// Labels equal to zero.
    pub negatives: u64,
}

impl ClassTotals {
    /// Counts positives and negatives in a 0/1 label slice.
    pub fn count(labels: &[u8]) -> Self {
        let positives = labels.iter().filter(|&&l| l != 0).count() as u64;
        let negatives = labels.len() as u64 - positives;
        Self {
            positives,
            negatives,
        }
    }

    /// Returns `true` if one of the classes is absent.
    ///
    /// For such label sets one rate axis is undefined; it is fixed at 0 and
    /// the reported AUC is 0.
    pub fn is_degenerate(&self) -> bool {
        self.positives == 0 || self.negatives == 0
    }

    /// True-positive rate for `tp` positives classified positive.
    pub fn tpr(&self, tp: u64) -> f64 {
        rate(tp, self.positives)
    }

    /// False-positive rate for `fp` negatives classified positive.
    pub fn fpr(&self, fp: u64) -> f64 {
        rate(fp, self.negatives)
    }
}

#[allow(clippy::cast_precision_loss)] // Counts stay far below 2^53
fn rate(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Clamps a score into `[0, 1]`. NaN passes through unchanged.
#[inline]
pub fn clamp_unit(score: f32) -> f32 {
    if score < 0.0 {
        0.0
    } else if score > 1.0 {
        1.0
    } else {
        score
    }
}

/// Key used to rank and group scores.
///
/// `-0.0` is folded into `0.0` so the two tie, and every NaN payload is
/// folded into the positive quiet NaN. Everything else keeps its IEEE total
/// order, which puts NaN above `+inf`.
#[inline]
pub(crate) fn rank_key(score: f32) -> f32 {
    if score == 0.0 {
        0.0
    } else if score.is_nan() {
        f32::NAN
    } else {
        score
    }
}
