//! Result assembly over a caller-owned, fixed-capacity point buffer.
//!
//! The curve computers push points into an [`OutputBuffer`] in sweep order.
//! The buffer never grows: it wraps the caller's slice and tracks how many
//! leading slots hold authoritative points. [`OutputBuffer::finish`] then
//! integrates the written prefix and applies the degenerate-label convention.
//!
//! Callers validate capacity before the first push, so a rejected call
//! never reaches this module and the buffer stays untouched.

use crate::auc;
use crate::curve::{ClassTotals, RocPoint, RocSummary};
use crate::error::{ComputeError, Result};

/// Write cursor over a caller-provided point slice.
#[derive(Debug)]
pub struct OutputBuffer<'a> {
    slots: &'a mut [RocPoint],
    written: usize,
}

impl<'a> OutputBuffer<'a> {
    /// Wraps a caller slice. Nothing is written until [`push`](Self::push).
    pub fn new(slots: &'a mut [RocPoint]) -> Self {
        Self { slots, written: 0 }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of points written so far.
    pub fn len(&self) -> usize {
        self.written
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// The most recently written point.
    pub fn last(&self) -> Option<&RocPoint> {
        self.written_points().last()
    }

    /// The authoritative prefix of the buffer.
    pub fn written_points(&self) -> &[RocPoint] {
        &self.slots[..self.written]
    }

    /// Writes the next point.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::InsufficientOutputCapacity`] if the buffer is
    /// full. Validated callers never hit this.
    #[inline]
    pub fn push(&mut self, point: RocPoint) -> Result<()> {
        let capacity = self.slots.len();
        let Some(slot) = self.slots.get_mut(self.written) else {
            return Err(ComputeError::InsufficientOutputCapacity {
                required: self.written + 1,
                capacity,
            }
            .into());
        };
        *slot = point;
        self.written += 1;
        Ok(())
    }

    /// Integrates the written curve and reports the summary.
    ///
    /// Degenerate label sets report an AUC of exactly 0.
    pub fn finish(self, totals: ClassTotals) -> RocSummary {
        let auc = if totals.is_degenerate() {
            0.0
        } else {
            auc::trapezoid(self.written_points())
        };
        RocSummary {
            points_written: self.written,
            auc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreMetricsError;

    const BALANCED: ClassTotals = ClassTotals {
        positives: 1,
        negatives: 1,
    };

    #[test]
    fn test_push_and_finish() {
        let mut slots = [RocPoint::default(); 4];
        let mut out = OutputBuffer::new(&mut slots);
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 4);

        out.push(RocPoint::origin(f32::INFINITY)).unwrap();
        out.push(RocPoint::terminus(f32::NEG_INFINITY)).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.last().unwrap().is_terminus());

        let summary = out.finish(BALANCED);
        assert_eq!(summary.points_written, 2);
        assert!((summary.auc - 0.5).abs() < 1e-12);

        // Slots past the written prefix are left as they were.
        assert_eq!(slots[2], RocPoint::default());
    }

    #[test]
    fn test_push_past_capacity() {
        let mut slots = [RocPoint::default(); 1];
        let mut out = OutputBuffer::new(&mut slots);
        out.push(RocPoint::origin(1.0)).unwrap();
        assert!(matches!(
            out.push(RocPoint::terminus(0.0)),
            Err(CoreMetricsError::Compute(
                ComputeError::InsufficientOutputCapacity {
                    required: 2,
                    capacity: 1
                }
            ))
        ));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_degenerate_finish_reports_zero() {
        let mut slots = [RocPoint::default(); 3];
        let mut out = OutputBuffer::new(&mut slots);
        out.push(RocPoint::origin(f32::INFINITY)).unwrap();
        out.push(RocPoint {
            fpr: 0.0,
            tpr: 1.0,
            threshold: 0.5,
        })
        .unwrap();
        out.push(RocPoint::terminus(f32::NEG_INFINITY)).unwrap();

        let summary = out.finish(ClassTotals {
            positives: 3,
            negatives: 0,
        });
        assert_eq!(summary.points_written, 3);
        assert_eq!(summary.auc, 0.0);
    }
}
