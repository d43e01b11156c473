//! HQNN Data Front End
//!
//! Loads a labelled CSV table, scales features into `[0, 1]`, splits rows
//! into reproducible train/test partitions, and provides the hinge metrics
//! the hybrid model is scored with.
//!
//! ```rust
//! use hqnn_data::{Dataset, MinMaxScaler, train_test_split};
//!
//! let csv = "age,chol,output\n63,233,1\n37,250,1\n56,236,0\n57,354,0\n";
//! let ds = Dataset::from_csv_reader(csv.as_bytes(), "output").unwrap();
//! let (_, scaled) = MinMaxScaler::fit_transform(ds.features()).unwrap();
//! let split = train_test_split(&scaled, ds.labels(), 0.25, 0).unwrap();
//! assert_eq!(split.n_test(), 1);
//! assert_eq!(split.n_train(), 3);
//! ```

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod scaler;
pub mod split;

pub use dataset::{DEFAULT_TARGET, Dataset};
pub use error::{DataError, DataResult};
pub use metrics::{hinge_accuracy, hinge_loss, readout_to_output};
pub use scaler::MinMaxScaler;
pub use split::{DEFAULT_SEED, DEFAULT_TEST_SIZE, TrainTestSplit, train_test_split};
