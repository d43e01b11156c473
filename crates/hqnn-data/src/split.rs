//! Seeded train/test splitting.

use ndarray::{Array1, Array2, Axis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{DataError, DataResult};

/// Default fraction of rows held out for testing.
pub const DEFAULT_TEST_SIZE: f64 = 0.25;

/// Default shuffle seed.
pub const DEFAULT_SEED: u64 = 0;

/// Disjoint train and test partitions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    /// Training features.
    pub x_train: Array2<f64>,
    /// Test features.
    pub x_test: Array2<f64>,
    /// Training labels.
    pub y_train: Array1<f64>,
    /// Test labels.
    pub y_test: Array1<f64>,
}

impl TrainTestSplit {
    /// Number of training rows.
    pub fn n_train(&self) -> usize {
        self.x_train.nrows()
    }

    /// Number of test rows.
    pub fn n_test(&self) -> usize {
        self.x_test.nrows()
    }
}

/// Shuffle rows with a seeded RNG and hold out `ceil(test_size * n)` of them.
///
/// The same `seed` always produces the same partition for the same input.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_size: f64,
    seed: u64,
) -> DataResult<TrainTestSplit> {
    let n_samples = x.nrows();
    if y.len() != n_samples {
        return Err(DataError::ShapeMismatch(format!(
            "{n_samples} rows but {} labels",
            y.len()
        )));
    }

    let invalid = || DataError::InvalidTestSize {
        test_size,
        n_samples,
    };
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(invalid());
    }
    let n_test = (test_size * n_samples as f64).ceil() as usize;
    if n_test == 0 || n_test >= n_samples {
        return Err(invalid());
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    debug!(
        n_train = train_idx.len(),
        n_test = test_idx.len(),
        seed,
        "split dataset"
    );

    Ok(TrainTestSplit {
        x_train: x.select(Axis(0), train_idx),
        x_test: x.select(Axis(0), test_idx),
        y_train: y.select(Axis(0), train_idx),
        y_test: y.select(Axis(0), test_idx),
    })
}
