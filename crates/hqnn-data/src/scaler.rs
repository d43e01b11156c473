//! Min-max feature scaling.

use ndarray::{Array1, Array2, Axis};

use crate::error::{DataError, DataResult};

/// Scales each feature column linearly into `[0, 1]`.
///
/// A column whose minimum equals its maximum is mapped to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    data_min: Array1<f64>,
    data_range: Array1<f64>,
}

impl MinMaxScaler {
    /// Learn per-column minimum and range from `x`.
    pub fn fit(x: &Array2<f64>) -> DataResult<Self> {
        if x.nrows() == 0 {
            return Err(DataError::EmptyDataset);
        }

        let data_min = x.fold_axis(Axis(0), f64::INFINITY, |acc, &v| acc.min(v));
        let data_max = x.fold_axis(Axis(0), f64::NEG_INFINITY, |acc, &v| acc.max(v));
        let data_range = (&data_max - &data_min).mapv(|r| if r == 0.0 { 1.0 } else { r });

        Ok(Self {
            data_min,
            data_range,
        })
    }

    /// Apply the learned scaling to `x`.
    ///
    /// Values outside the fitted range map outside `[0, 1]`.
    pub fn transform(&self, x: &Array2<f64>) -> DataResult<Array2<f64>> {
        if x.ncols() != self.data_min.len() {
            return Err(DataError::ShapeMismatch(format!(
                "scaler fitted on {} columns, got {}",
                self.data_min.len(),
                x.ncols()
            )));
        }
        Ok((x - &self.data_min) / &self.data_range)
    }

    /// Fit on `x` and transform it.
    pub fn fit_transform(x: &Array2<f64>) -> DataResult<(Self, Array2<f64>)> {
        let scaler = Self::fit(x)?;
        let scaled = scaler.transform(x)?;
        Ok((scaler, scaled))
    }

    /// Per-column minimum seen during fit.
    pub fn data_min(&self) -> &Array1<f64> {
        &self.data_min
    }

    /// Per-column range seen during fit (1 for constant columns).
    pub fn data_range(&self) -> &Array1<f64> {
        &self.data_range
    }
}
