//! Example comparing exact and binned ROC curves on a small dataset.
//!
//! This example shows how to:
//! - Compute an exact curve into a caller-owned buffer
//! - Compute binned curves at several resolutions
//! - Use the owned `evaluate_roc` API with a config
//! - Serialize a curve to JSON

#![allow(clippy::cast_sign_loss)]

use coremetrics::error::Result;
use coremetrics::{RocConfig, RocPoint, compute_roc_binned, compute_roc_exact, evaluate_roc};

fn main() -> Result<()> {
    println!("coremetrics ROC example");

    let scores = [0.92, 0.81, 0.81, 0.74, 0.66, 0.52, 0.43, 0.38, 0.21, 0.05];
    let labels = [1, 1, 0, 1, 0, 1, 0, 0, 1, 0];

    // Exact mode needs room for n + 2 points.
    let mut out = vec![RocPoint::default(); scores.len() + 2];
    let summary = compute_roc_exact(&scores, &labels, &mut out, true)?;

    println!("\nExact curve ({} points):", summary.points_written);
    println!("{:>10} {:>8} {:>8}", "threshold", "fpr", "tpr");
    for point in &out[..summary.points_written] {
        println!(
            "{:>10.3} {:>8.3} {:>8.3}",
            point.threshold, point.fpr, point.tpr
        );
    }
    println!("AUC = {:.4}", summary.auc);
    let exact_auc = summary.auc;

    println!("\nBinned AUC by resolution:");
    for buckets in [2, 5, 10, 100] {
        let mut out = vec![RocPoint::default(); buckets as usize + 1];
        let summary = compute_roc_binned(&scores, &labels, buckets, &mut out, true)?;
        println!(
            "  {buckets:>4} buckets: AUC = {:.4} (off by {:.4})",
            summary.auc,
            (summary.auc - exact_auc).abs()
        );
    }

    let bool_labels: Vec<bool> = labels.iter().map(|&l| l != 0).collect();
    let curve = evaluate_roc(&scores, &bool_labels, &RocConfig::binned(4)?)?;
    match serde_json::to_string_pretty(&curve) {
        Ok(json) => println!("\nBinned curve as JSON:\n{json}"),
        Err(e) => eprintln!("failed to serialize curve: {e}"),
    }

    Ok(())
}
