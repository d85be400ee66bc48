//! Owned evaluation API over the fixed-buffer compute functions.
//!
//! [`evaluate_roc`] is the convenient entry point: it converts boolean labels
//! to the byte form, sizes the output buffer to the mode's bound (`n + 2` for
//! exact, `buckets + 1` for binned), runs the computer, and trims the buffer
//! to the points actually written.
//!
//! ```rust
//! use coremetrics::{RocConfig, evaluate_roc};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scores = [0.1, 0.4, 0.35, 0.8];
//! let labels = [false, false, true, true];
//!
//! let curve = evaluate_roc(&scores, &labels, &RocConfig::exact())?;
//! assert!((curve.auc() - 0.75).abs() < 1e-12);
//!
//! let binned = evaluate_roc(&scores, &labels, &RocConfig::binned(10)?)?;
//! assert_eq!(binned.len(), 11);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::binned::compute_roc_binned;
use crate::config::{RocConfig, RocMode};
use crate::curve::{ClassTotals, RocPoint};
use crate::error::{ComputeError, Result};
use crate::exact::compute_roc_exact;
use crate::validate;

/// A computed ROC curve with its AUC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsCurve {
    mode: RocMode,
    points: Vec<RocPoint>,
    auc: f64,
}

impl MetricsCurve {
    /// Mode that produced the curve.
    pub fn mode(&self) -> RocMode {
        self.mode
    }

    /// Points in sweep order, strictest threshold first.
    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    /// Area under the curve.
    pub fn auc(&self) -> f64 {
        self.auc
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a curve produced by [`evaluate_roc`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the curve, returning its points and AUC.
    pub fn into_parts(self) -> (Vec<RocPoint>, f64) {
        (self.points, self.auc)
    }
}

/// Computes a ROC curve and AUC according to `config`.
///
/// # Errors
///
/// Returns [`crate::error::ConfigError::InvalidBuckets`] for an invalid
/// config, or the [`ComputeError`] raised by input validation.
pub fn evaluate_roc(scores: &[f32], labels: &[bool], config: &RocConfig) -> Result<MetricsCurve> {
    config.validate()?;
    if scores.len() != labels.len() {
        return Err(ComputeError::InvalidCount {
            scores: scores.len(),
            labels: labels.len(),
        }
        .into());
    }

    let label_bytes: Vec<u8> = labels.iter().map(|&l| u8::from(l)).collect();
    let clamp = config.clamp_to_unit_interval;

    tracing::debug!(
        mode = ?config.mode,
        samples = scores.len(),
        buckets = config.buckets,
        clamp,
        "evaluating ROC curve"
    );

    let totals = ClassTotals::count(&label_bytes);
    if totals.is_degenerate() && !scores.is_empty() {
        tracing::warn!(
            positives = totals.positives,
            negatives = totals.negatives,
            "single-class labels: AUC reported as 0"
        );
    }

    let capacity = match config.mode {
        RocMode::Exact => scores.len() + 2,
        RocMode::Binned => validate::binned_point_count(config.buckets)?,
    };
    let mut points = vec![RocPoint::default(); capacity];

    let summary = match config.mode {
        RocMode::Exact => compute_roc_exact(scores, &label_bytes, &mut points, clamp)?,
        RocMode::Binned => {
            compute_roc_binned(scores, &label_bytes, config.buckets, &mut points, clamp)?
        }
    };
    points.truncate(summary.points_written);

    tracing::debug!(points = points.len(), auc = summary.auc, "ROC curve computed");

    Ok(MetricsCurve {
        mode: config.mode,
        points,
        auc: summary.auc,
    })
}
