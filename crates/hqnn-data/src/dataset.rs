//! Labelled tabular datasets loaded from CSV.

use ndarray::{Array1, Array2};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::error::{DataError, DataResult};

/// Default label column of the heart-disease dataset.
pub const DEFAULT_TARGET: &str = "output";

/// A feature matrix with one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    feature_names: Vec<String>,
    target_name: String,
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl Dataset {
    /// Create a dataset, checking that the shapes agree.
    pub fn new(
        feature_names: Vec<String>,
        target_name: impl Into<String>,
        features: Array2<f64>,
        labels: Array1<f64>,
    ) -> DataResult<Self> {
        if features.ncols() != feature_names.len() {
            return Err(DataError::ShapeMismatch(format!(
                "{} feature names for {} columns",
                feature_names.len(),
                features.ncols()
            )));
        }
        if features.nrows() != labels.len() {
            return Err(DataError::ShapeMismatch(format!(
                "{} rows but {} labels",
                features.nrows(),
                labels.len()
            )));
        }
        Ok(Self {
            feature_names,
            target_name: target_name.into(),
            features,
            labels,
        })
    }

    /// Load a CSV file, splitting off the `target` column as labels.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, target: &str) -> DataResult<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| DataError::Io {
            path: path_ref.display().to_string(),
            source: e,
        })?;
        let dataset = Self::from_csv_reader(BufReader::new(file), target).map_err(|e| match e {
            DataError::Io { source, .. } => DataError::Io {
                path: path_ref.display().to_string(),
                source,
            },
            other => other,
        })?;
        debug!(
            path = %path_ref.display(),
            n_samples = dataset.n_samples(),
            n_features = dataset.n_features(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV from a reader.
    ///
    /// The first line is the header. Blank lines are skipped. Every field of
    /// every other line must parse as a number. Fields may be double-quoted,
    /// but a record must fit on one line.
    pub fn from_csv_reader<R: BufRead>(reader: R, target: &str) -> DataResult<Self> {
        let mut lines = reader.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((_, line)) => {
                    let line = line.map_err(read_error)?;
                    if !line.trim().is_empty() {
                        break split_fields(&line);
                    }
                }
                None => return Err(DataError::MissingHeader),
            }
        };

        let target_idx = header
            .iter()
            .position(|h| h == target)
            .ok_or_else(|| DataError::MissingColumn(target.to_string()))?;

        let mut values = Vec::new();
        let mut labels = Vec::new();
        let mut n_rows = 0usize;

        for (idx, line) in lines {
            let line = line.map_err(read_error)?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;
            let fields = split_fields(&line);
            if fields.len() != header.len() {
                return Err(DataError::RaggedRow {
                    line: line_no,
                    expected: header.len(),
                    got: fields.len(),
                });
            }

            for (col, field) in fields.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| DataError::InvalidNumber {
                    line: line_no,
                    column: header[col].clone(),
                    value: field.clone(),
                })?;
                if col == target_idx {
                    labels.push(value);
                } else {
                    values.push(value);
                }
            }
            n_rows += 1;
        }

        if n_rows == 0 {
            return Err(DataError::EmptyDataset);
        }

        let feature_names: Vec<String> = header
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != target_idx)
            .map(|(_, h)| h.clone())
            .collect();
        let features = Array2::from_shape_vec((n_rows, feature_names.len()), values)
            .map_err(|e| DataError::ShapeMismatch(e.to_string()))?;

        Self::new(feature_names, target, features, Array1::from(labels))
    }

    /// Feature column names, in column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Name of the label column.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// The feature matrix, one row per sample.
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    /// The labels.
    pub fn labels(&self) -> &Array1<f64> {
        &self.labels
    }

    /// Number of rows.
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Fraction of rows with a positive label.
    pub fn positive_fraction(&self) -> f64 {
        let positives = self.labels.iter().filter(|&&y| y > 0.0).count();
        positives as f64 / self.n_samples() as f64
    }

    /// Split into feature matrix and labels.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.features, self.labels)
    }

    /// Render the first `n` rows as a text table, label column last.
    pub fn head(&self, n: usize) -> String {
        let mut out = String::new();
        let _ = write!(out, "{:>4}", "");
        for name in self.feature_names.iter().chain(std::iter::once(&self.target_name)) {
            let _ = write!(out, " {name:>9}");
        }
        out.push('\n');

        for (i, row) in self.features.rows().into_iter().take(n).enumerate() {
            let _ = write!(out, "{i:>4}");
            for value in row.iter().chain(std::iter::once(&self.labels[i])) {
                let _ = write!(out, " {value:>9.3}");
            }
            out.push('\n');
        }
        out
    }
}

/// Split one CSV record on commas outside double quotes.
///
/// Quotes are removed and `""` inside a quoted field is a literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

fn read_error(e: std::io::Error) -> DataError {
    DataError::Io {
        path: "<reader>".to_string(),
        source: e,
    }
}
