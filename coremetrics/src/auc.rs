//! Trapezoidal AUC integration.

use crate::curve::RocPoint;

/// Integrates the area under an ordered run of ROC points.
///
/// Sums `(fpr[i+1] - fpr[i]) * (tpr[i] + tpr[i+1]) / 2` over consecutive
/// pairs in `f64`. A step whose FPR decreases contributes zero width, so the
/// result stays in `[0, 1]` for rates in `[0, 1]`. Fewer than two points
/// enclose no area.
pub fn trapezoid(points: &[RocPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| trapezoid_step(&pair[0], &pair[1]))
        .sum()
}

#[inline]
fn trapezoid_step(prev: &RocPoint, cur: &RocPoint) -> f64 {
    let dx = (cur.fpr - prev.fpr).max(0.0);
    dx * (cur.tpr + prev.tpr) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(fpr: f64, tpr: f64) -> RocPoint {
        RocPoint {
            fpr,
            tpr,
            threshold: 0.0,
        }
    }

    #[test]
    fn test_diagonal_is_half() {
        let auc = trapezoid(&[pt(0.0, 0.0), pt(1.0, 1.0)]);
        assert!((auc - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_curve() {
        let auc = trapezoid(&[pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0)]);
        assert!((auc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_staircase() {
        let points = [
            pt(0.0, 0.0),
            pt(0.0, 0.5),
            pt(0.5, 0.5),
            pt(0.5, 1.0),
            pt(1.0, 1.0),
        ];
        assert!((trapezoid(&points) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_backwards_step_contributes_nothing() {
        let points = [pt(0.0, 0.0), pt(0.6, 1.0), pt(0.4, 1.0), pt(1.0, 1.0)];
        // 0.6 * 0.5 + 0 + 0.6 * 1.0
        assert!((trapezoid(&points) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(trapezoid(&[]), 0.0);
        assert_eq!(trapezoid(&[pt(0.3, 0.3)]), 0.0);
    }
}
