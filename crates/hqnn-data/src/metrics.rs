//! Hinge metrics for ±1 readout classifiers.
//!
//! The model output is the readout expectation value in `[-1, 1]`; labels
//! may be given as `{0, 1}` or `{-1, 1}`.

use ndarray::ArrayView1;

use crate::error::{DataError, DataResult};

/// Map a readout expectation in `[-1, 1]` to the model output in `[0, 1]`.
#[inline]
pub fn readout_to_output(expectation: f64) -> f64 {
    (expectation + 1.0) / 2.0
}

/// Mean hinge loss `max(0, 1 - y * ŷ)`.
///
/// If every label is 0 or 1 the labels are first mapped to -1 and 1.
pub fn hinge_loss(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> DataResult<f64> {
    check_lengths(&y_true, &y_pred)?;

    let binary = y_true.iter().all(|&y| y == 0.0 || y == 1.0);
    let total: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&y, &p)| {
            let y = if binary { 2.0 * y - 1.0 } else { y };
            (1.0 - y * p).max(0.0)
        })
        .sum();
    Ok(total / y_true.len() as f64)
}

/// Fraction of samples where the sign of the prediction matches the label.
///
/// A value counts as positive when it is strictly greater than zero.
pub fn hinge_accuracy(
    y_true: ArrayView1<'_, f64>,
    y_pred: ArrayView1<'_, f64>,
) -> DataResult<f64> {
    check_lengths(&y_true, &y_pred)?;

    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|&(&y, &p)| (y > 0.0) == (p > 0.0))
        .count();
    Ok(hits as f64 / y_true.len() as f64)
}

fn check_lengths(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> DataResult<()> {
    if a.is_empty() {
        return Err(DataError::EmptyDataset);
    }
    if a.len() != b.len() {
        return Err(DataError::ShapeMismatch(format!(
            "{} labels but {} predictions",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}
