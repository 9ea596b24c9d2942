//! Labeled points stored as CSV.
//!
//! The expected layout is one header row followed by one record per example:
//!
//! ```text
//! x0,x1,label
//! 0.83,-0.41,1
//! -1.02,0.27,0
//! ```
//!
//! The last field is an integer class label, all preceding fields are
//! features. Surrounding whitespace is ignored.

use super::traits::Dataset;
use csv::{ReaderBuilder, StringRecord, Trim};
use minigrad_core::MinigradError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One example: a feature vector and its integer class label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub features: Vec<f64>,
    pub label: i64,
}

/// In-memory dataset of [`LabeledPoint`]s parsed from CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDataset {
    points: Vec<LabeledPoint>,
    n_features: usize,
}

impl CsvDataset {
    /// Reads a CSV file with `n_features` feature columns and a label column.
    ///
    /// # Errors
    /// `Io` if the file cannot be opened or read, `DatasetParse` for malformed
    /// records (see [`CsvDataset::from_reader`]).
    pub fn from_path<P: AsRef<Path>>(path: P, n_features: usize) -> Result<Self, MinigradError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| MinigradError::Io(format!("{}: {}", path.display(), e)))?;
        let dataset = Self::from_reader(file, n_features)?;
        log::info!(
            "loaded {} points with {} features from {}",
            dataset.len(),
            n_features,
            path.display()
        );
        Ok(dataset)
    }

    /// Parses CSV data from any reader. The first row is treated as a header
    /// and skipped.
    ///
    /// # Errors
    /// `DatasetParse` with the 1-based line number of the first record that
    /// has the wrong number of fields or a field that does not parse.
    pub fn from_reader<R: Read>(reader: R, n_features: usize) -> Result<Self, MinigradError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut points = Vec::new();
        let mut record = StringRecord::new();
        // The header occupies line 1.
        let mut line = 1;
        loop {
            match rdr.read_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => return Err(map_csv_error(err, line + 1)),
            }
            line = record.position().map_or(line + 1, |p| p.line());
            points.push(parse_record(&record, n_features, line)?);
        }

        Ok(CsvDataset { points, n_features })
    }

    pub fn from_points(points: Vec<LabeledPoint>, n_features: usize) -> Result<Self, MinigradError> {
        if let Some(bad) = points.iter().find(|p| p.features.len() != n_features) {
            return Err(MinigradError::InputSizeMismatch {
                expected: n_features,
                actual: bad.features.len(),
            });
        }
        Ok(CsvDataset { points, n_features })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<LabeledPoint> {
        self.points
    }
}

impl Dataset for CsvDataset {
    type Item = LabeledPoint;

    fn get(&self, index: usize) -> Result<Self::Item, MinigradError> {
        self.points
            .get(index)
            .cloned()
            .ok_or(MinigradError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            })
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

fn parse_record(record: &StringRecord, n_features: usize, line: u64) -> Result<LabeledPoint, MinigradError> {
    if record.len() != n_features + 1 {
        return Err(MinigradError::DatasetParse {
            line,
            message: format!("expected {} fields, found {}", n_features + 1, record.len()),
        });
    }

    let mut features = Vec::with_capacity(n_features);
    for (column, field) in record.iter().take(n_features).enumerate() {
        let value = field.parse::<f64>().map_err(|e| MinigradError::DatasetParse {
            line,
            message: format!("feature {} ({:?}): {}", column, field, e),
        })?;
        features.push(value);
    }

    let field = &record[n_features];
    let label = field.parse::<i64>().map_err(|e| MinigradError::DatasetParse {
        line,
        message: format!("label ({:?}): {}", field, e),
    })?;

    Ok(LabeledPoint { features, label })
}

fn map_csv_error(err: csv::Error, fallback_line: u64) -> MinigradError {
    let line = err.position().map_or(fallback_line, |p| p.line());
    match err.kind() {
        csv::ErrorKind::Io(io) => MinigradError::Io(io.to_string()),
        _ => MinigradError::DatasetParse {
            line,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "csv_dataset_test.rs"]
mod tests;
