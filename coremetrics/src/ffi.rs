//! C-compatible entry points, enabled with the `ffi` feature.
//!
//! Hosts that load `libcoremetrics` as a shared library call these:
//!
//! ```c
//! int32_t ComputeRocAuc_Binned(const float* scores, const uint8_t* labels, size_t n,
//!                              int32_t buckets, RocPoint* out_roc, size_t out_roc_len,
//!                              double* out_auc, uint8_t clamp01);
//! int32_t ComputeRocAuc_Exact(const float* scores, const uint8_t* labels, size_t n,
//!                             RocPoint* out_roc, size_t out_roc_len,
//!                             size_t* out_points_written, double* out_auc, uint8_t clamp01);
//! ```
//!
//! Both return a [`StatusCode`] as `int32_t`. A null pointer anywhere yields
//! `NullInput`; out-parameters are only written on `Ok`.
//!
//! The module only exists with the feature on, and so do its tests:
//! run them with `cargo test -p coremetrics --features ffi`.

#![allow(non_snake_case)]

use std::slice;

use crate::binned::compute_roc_binned;
use crate::curve::RocPoint;
use crate::error::{CoreMetricsError, Result, StatusCode};
use crate::exact::compute_roc_exact;
use crate::validate;

/// Binned ROC/AUC over raw buffers.
///
/// # Safety
///
/// Non-null `scores` and `labels` must each point to `n` readable elements,
/// non-null `out_roc` to `out_roc_len` writable points, and non-null
/// `out_auc` to a writable `f64`. None of the regions may overlap.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ComputeRocAuc_Binned(
    scores: *const f32,
    labels: *const u8,
    n: usize,
    buckets: i32,
    out_roc: *mut RocPoint,
    out_roc_len: usize,
    out_auc: *mut f64,
    clamp01: u8,
) -> i32 {
    if out_auc.is_null() {
        return StatusCode::NullInput.as_i32();
    }
    // SAFETY: the caller guarantees the pointer/length pairs describe valid,
    // non-overlapping regions; nulls are mapped to `None`.
    let inputs = unsafe { borrow_inputs(scores, labels, n, out_roc, out_roc_len) };

    let result = inputs.and_then(|(scores, labels, out)| {
        compute_roc_binned(scores, labels, buckets, out, clamp01 != 0)
    });
    match result {
        Ok(summary) => {
            // SAFETY: `out_auc` is non-null and writable per the contract.
            unsafe { out_auc.write(summary.auc) };
            StatusCode::Ok.as_i32()
        }
        Err(e) => status_of(&e),
    }
}

/// Exact ROC/AUC over raw buffers.
///
/// # Safety
///
/// Non-null `scores` and `labels` must each point to `n` readable elements,
/// non-null `out_roc` to `out_roc_len` writable points, and non-null
/// `out_points_written` and `out_auc` to writable scalars. None of the
/// regions may overlap.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ComputeRocAuc_Exact(
    scores: *const f32,
    labels: *const u8,
    n: usize,
    out_roc: *mut RocPoint,
    out_roc_len: usize,
    out_points_written: *mut usize,
    out_auc: *mut f64,
    clamp01: u8,
) -> i32 {
    if out_points_written.is_null() || out_auc.is_null() {
        return StatusCode::NullInput.as_i32();
    }
    // SAFETY: as in `ComputeRocAuc_Binned`.
    let inputs = unsafe { borrow_inputs(scores, labels, n, out_roc, out_roc_len) };

    let result = inputs
        .and_then(|(scores, labels, out)| compute_roc_exact(scores, labels, out, clamp01 != 0));
    match result {
        Ok(summary) => {
            // SAFETY: both out-parameters are non-null and writable per the
            // contract.
            unsafe {
                out_points_written.write(summary.points_written);
                out_auc.write(summary.auc);
            }
            StatusCode::Ok.as_i32()
        }
        Err(e) => status_of(&e),
    }
}

type Borrowed<'a> = (&'a [f32], &'a [u8], &'a mut [RocPoint]);

/// Turns the raw pointer/length pairs into slices, rejecting nulls.
///
/// # Safety
///
/// Each non-null pointer must be valid for its length for `'a`, and the
/// output region must not overlap the inputs.
unsafe fn borrow_inputs<'a>(
    scores: *const f32,
    labels: *const u8,
    n: usize,
    out_roc: *mut RocPoint,
    out_roc_len: usize,
) -> Result<Borrowed<'a>> {
    // SAFETY: non-null pointers are valid for `n` elements per the contract.
    let scores = (!scores.is_null()).then(|| unsafe { slice::from_raw_parts(scores, n) });
    // SAFETY: as above.
    let labels = (!labels.is_null()).then(|| unsafe { slice::from_raw_parts(labels, n) });
    let scores = validate::require(scores, "scores")?;
    let labels = validate::require(labels, "labels")?;

    if out_roc.is_null() {
        return Err(crate::error::ComputeError::NullInput { input: "out_roc" }.into());
    }
    // SAFETY: non-null, valid for `out_roc_len` writes and disjoint from the
    // inputs per the contract.
    let out = unsafe { slice::from_raw_parts_mut(out_roc, out_roc_len) };
    Ok((scores, labels, out))
}

fn status_of(err: &CoreMetricsError) -> i32 {
    err.status().unwrap_or(StatusCode::InvalidCount).as_i32()
}
