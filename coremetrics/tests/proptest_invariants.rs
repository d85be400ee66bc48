//! Property tests for curve shape and AUC invariants across both modes.

use coremetrics::{RocPoint, StatusCode, compute_roc_binned, compute_roc_exact};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

const MIN_PROPTEST_CASES: u32 = 256;

fn proptest_cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .map(|parsed| parsed.max(MIN_PROPTEST_CASES))
        .unwrap_or(MIN_PROPTEST_CASES)
}

fn sentinel() -> RocPoint {
    RocPoint {
        fpr: -1.0,
        tpr: -1.0,
        threshold: 42.0,
    }
}

fn exact(scores: &[f32], labels: &[u8]) -> (Vec<RocPoint>, f64) {
    let mut out = vec![RocPoint::default(); scores.len() + 2];
    let summary = compute_roc_exact(scores, labels, &mut out, false).unwrap();
    out.truncate(summary.points_written);
    (out, summary.auc)
}

fn is_monotone(points: &[RocPoint]) -> bool {
    points
        .windows(2)
        .all(|p| p[1].fpr >= p[0].fpr && p[1].tpr >= p[0].tpr)
}

fn ends_at_corners(points: &[RocPoint]) -> bool {
    let (first, last) = (points[0], points[points.len() - 1]);
    (first.fpr, first.tpr) == (0.0, 0.0) && (last.fpr, last.tpr) == (1.0, 1.0)
}

/// Integer-valued scores so ties are common and shifts are exact in `f32`.
fn samples(max_len: usize) -> impl Strategy<Value = Vec<(f32, u8)>> {
    prop::collection::vec((-50i16..50, 0u8..2), 1..max_len).prop_map(|rows| {
        rows.into_iter()
            .map(|(score, label)| (f32::from(score), label))
            .collect()
    })
}

fn split(rows: &[(f32, u8)]) -> (Vec<f32>, Vec<u8>) {
    rows.iter().copied().unzip()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: proptest_cases(),
        max_shrink_iters: 1024,
        failure_persistence: Some(Box::new(FileFailurePersistence::Direct("proptest-regressions/tests/proptest_invariants.txt"))),
        .. ProptestConfig::default()
    })]

    #[test]
    fn exact_curve_shape(rows in samples(96)) {
        let (scores, labels) = split(&rows);
        let (points, auc) = exact(&scores, &labels);

        prop_assert!(points.len() >= 2);
        prop_assert!(points.len() <= scores.len() + 2);
        prop_assert!(is_monotone(&points));
        prop_assert!(ends_at_corners(&points));
        prop_assert!((0.0..=1.0).contains(&auc));
        for pair in points.windows(2) {
            prop_assert!(pair[1].threshold < pair[0].threshold);
        }
    }

    #[test]
    fn binned_curve_shape(rows in samples(96), buckets in 1i32..200, clamp01 in any::<bool>()) {
        let (scores, labels) = split(&rows);
        let len = usize::try_from(buckets).unwrap() + 1;
        let mut out = vec![RocPoint::default(); len];
        let summary = compute_roc_binned(&scores, &labels, buckets, &mut out, clamp01).unwrap();

        prop_assert_eq!(summary.points_written, len);
        prop_assert!(is_monotone(&out));
        prop_assert!(ends_at_corners(&out));
        prop_assert!((0.0..=1.0).contains(&summary.auc));
    }

    #[test]
    fn exact_is_invariant_to_sample_order(
        (rows, shuffled) in samples(64).prop_flat_map(|rows| {
            let shuffled = Just(rows.clone()).prop_shuffle();
            (Just(rows), shuffled)
        }),
    ) {
        let (scores, labels) = split(&rows);
        let (shuffled_scores, shuffled_labels) = split(&shuffled);

        let (points, auc) = exact(&scores, &labels);
        let (shuffled_points, shuffled_auc) = exact(&shuffled_scores, &shuffled_labels);
        prop_assert_eq!(points, shuffled_points);
        prop_assert_eq!(auc, shuffled_auc);
    }

    #[test]
    fn exact_is_invariant_to_score_shift(rows in samples(64), shift in -100i16..100) {
        let (scores, labels) = split(&rows);
        let shifted: Vec<f32> = scores.iter().map(|s| s + f32::from(shift)).collect();

        let (points, auc) = exact(&scores, &labels);
        let (shifted_points, shifted_auc) = exact(&shifted, &labels);
        prop_assert_eq!(points.len(), shifted_points.len());
        for (a, b) in points.iter().zip(&shifted_points) {
            prop_assert_eq!((a.fpr, a.tpr), (b.fpr, b.tpr));
        }
        prop_assert_eq!(auc, shifted_auc);
    }

    #[test]
    fn separated_classes_score_one_or_zero(
        negatives in prop::collection::vec(0i16..50, 1..32),
        positives in prop::collection::vec(51i16..100, 1..32),
    ) {
        let mut scores: Vec<f32> = negatives.iter().map(|&s| f32::from(s)).collect();
        let mut labels = vec![0u8; negatives.len()];
        scores.extend(positives.iter().map(|&s| f32::from(s)));
        labels.extend(std::iter::repeat_n(1u8, positives.len()));

        let (_, auc) = exact(&scores, &labels);
        prop_assert!((auc - 1.0).abs() < 1e-9);

        let flipped: Vec<u8> = labels.iter().map(|&l| 1 - l).collect();
        let (_, auc) = exact(&scores, &flipped);
        prop_assert!(auc.abs() < 1e-9);
    }

    #[test]
    fn short_buffers_are_left_untouched(rows in samples(32), short_by in 1usize..4) {
        let (scores, labels) = split(&rows);
        let capacity = (scores.len() + 2).saturating_sub(short_by);
        let mut out = vec![sentinel(); capacity];

        let err = compute_roc_exact(&scores, &labels, &mut out, true).unwrap_err();
        prop_assert_eq!(err.status(), Some(StatusCode::InsufficientOutputCapacity));
        prop_assert!(out.iter().all(|p| *p == sentinel()));

        let buckets = i32::try_from(capacity.max(1)).unwrap();
        let err = compute_roc_binned(&scores, &labels, buckets, &mut out, true).unwrap_err();
        prop_assert_eq!(err.status(), Some(StatusCode::InsufficientOutputCapacity));
        prop_assert!(out.iter().all(|p| *p == sentinel()));
    }
}
