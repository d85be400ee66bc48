//! # coremetrics
//!
//! ROC curve and AUC engine for binary classifier evaluation.
//!
//! Given parallel arrays of classifier scores and 0/1 labels, coremetrics
//! produces either an *exact* ROC curve (one point per distinct score) or a
//! *binned* curve (a fixed number of evenly spaced thresholds), together with
//! the trapezoidal area under the curve.
//!
//! ## Key Properties
//!
//! - Caller-owned, fixed-capacity output buffers: the compute functions never
//!   allocate output and never grow the buffer
//! - Fail-fast validation with stable integer status codes; a rejected call
//!   leaves the output buffer untouched
//! - Ties are consumed as a single threshold step
//! - Deterministic point counts: `2..=n + 2` exact, `buckets + 1` binned
//! - Stateless and synchronous; concurrent calls on disjoint buffers are safe
//!
//! ## Quick Start
//!
//! ```rust
//! use coremetrics::{RocPoint, compute_roc_exact};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scores = [0.1, 0.4, 0.35, 0.8];
//! let labels = [0, 0, 1, 1];
//!
//! // Exact mode needs room for n + 2 points.
//! let mut out = [RocPoint::default(); 6];
//! let summary = compute_roc_exact(&scores, &labels, &mut out, false)?;
//!
//! for point in &out[..summary.points_written] {
//!     println!("fpr={} tpr={} threshold={}", point.fpr, point.tpr, point.threshold);
//! }
//! assert!((summary.auc - 0.75).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! For an owned result sized automatically, use [`evaluate_roc`] with a
//! [`RocConfig`].
//!
//! ## Degenerate Labels
//!
//! When every label is the same, one rate axis is undefined. It is fixed at 0
//! on every point between the `(0, 0)` and `(1, 1)` boundaries, and the
//! reported AUC is `0.0`. The call still succeeds.
//!
//! ## Modules
//!
//! - [`validate`]: Input checks shared by both modes
//! - [`exact`]: Exact curve computer
//! - [`binned`]: Binned curve computer
//! - [`auc`]: Trapezoidal integration
//! - [`assemble`]: Fixed-capacity output buffer and result summary
//! - [`curve`]: Points, samples, class totals
//! - [`evaluate`]: Owned evaluation API
//! - [`config`]: Evaluation configuration
//! - [`dataset`]: CSV/JSON dataset loading
//! - [`error`]: Error types and status codes
//! - `ffi`: C ABI (with the `ffi` feature)

pub mod assemble;
pub mod auc;
pub mod binned;
pub mod config;
pub mod curve;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod exact;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod validate;

// Re-export primary API types at crate root for convenience.
pub use binned::compute_roc_binned;
pub use config::{RocConfig, RocMode};
pub use curve::{RocPoint, RocSummary};
pub use dataset::Samples;
pub use error::{ComputeError, CoreMetricsError, Result, StatusCode};
pub use evaluate::{MetricsCurve, evaluate_roc};
pub use exact::compute_roc_exact;
