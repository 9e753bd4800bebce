//! Error types produced while integrating, loading or composing sections.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a section table cannot be integrated.
///
/// Both variants are precondition failures: the integration loop itself has no
/// failure modes, so the inputs are validated once before it runs.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    /// Returned when a section holds fewer than two samples.
    #[error("a section needs at least 2 samples to form a segment (received {len})")]
    TooFewSamples {
        /// Number of samples supplied.
        len: usize,
    },
    /// Returned when the coordinate and coefficient arrays differ in length.
    #[error("{array} holds {found} samples but the pressure coefficients hold {expected}")]
    LengthMismatch {
        /// Name of the offending array.
        array: &'static str,
        /// Number of pressure coefficient samples.
        expected: usize,
        /// Number of samples in the offending array.
        found: usize,
    },
    /// Returned when a column mapping points past the width of a sample table.
    #[error("column {column} requested for {role} but the table has {width} columns")]
    MissingColumn {
        /// Quantity the column was meant to hold.
        role: &'static str,
        /// Requested column.
        column: usize,
        /// Width of the table.
        width: usize,
    },
}

/// Contribution set a section belongs to during spanwise accumulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contribution {
    /// Sections carrying the pressure distribution.
    Pressure,
    /// Sections carrying the friction distribution.
    Friction,
}

impl std::fmt::Display for Contribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Contribution::Pressure => f.write_str("pressure"),
            Contribution::Friction => f.write_str("friction"),
        }
    }
}

/// Error returned when per-section coefficients cannot be combined over the span.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AccumulationError {
    /// Returned when one section of a contribution set fails its preconditions.
    #[error("{set} section {index} cannot be integrated: {source}")]
    Section {
        /// Contribution set holding the section.
        set: Contribution,
        /// Index of the section inside its set.
        index: usize,
        /// Underlying precondition failure.
        #[source]
        source: SectionError,
    },
    /// Returned when a section lies two or more places past the last spanwise station,
    /// so the preceding station needed for its width does not exist.
    #[error("section {index} has no preceding spanwise station (only {stations} stations)")]
    MissingStation {
        /// Index of the section.
        index: usize,
        /// Number of spanwise stations supplied.
        stations: usize,
    },
}

/// Error returned while discovering or parsing slice files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Returned when a directory holds no `slice_0` file.
    #[error("no sections found in {directory}/")]
    NoSections {
        /// Name of the directory that was searched.
        directory: String,
    },
    /// Returned when a directory or file cannot be read.
    #[error("cannot read {}", .path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the CSV reader rejects a file.
    #[error("malformed sample file {}", .path.display())]
    Csv {
        /// Path being read.
        path: PathBuf,
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// Returned when a field is not a number.
    #[error("non-numeric value in {} at row {row}, column {column}", .path.display())]
    Parse {
        /// Path being read.
        path: PathBuf,
        /// Zero-based data row, counted after the skipped header rows.
        row: usize,
        /// Zero-based column.
        column: usize,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// Returned when a row does not have the width of the first row.
    #[error("ragged row {row} in {}: expected {expected} fields, found {found}", .path.display())]
    Ragged {
        /// Path being read.
        path: PathBuf,
        /// Zero-based data row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// Error returned by the file-driven wing computation.
#[derive(Debug, Error)]
pub enum WingError {
    /// Returned when a section directory cannot be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Returned when the loaded sections cannot be accumulated.
    #[error(transparent)]
    Accumulation(#[from] AccumulationError),
}

/// Error returned while reading a study configuration or composing figures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a configuration or description file cannot be accessed.
    #[error("cannot access {}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when a document is not valid JSON for the expected schema.
    #[error("invalid JSON document")]
    Json(#[from] serde_json::Error),
    /// Returned when the configuration lists no curves.
    #[error("no curves specified")]
    NoCurves,
    /// Returned when a curve has neither a slice directory nor inline data.
    #[error("curve '{curve}' has no path and no data")]
    MissingData {
        /// Name of the curve.
        curve: String,
    },
    /// Returned when curve sets do not all provide the same number of curves.
    #[error("curve set '{curve}' provides {found} curves but {expected} figures are being composed")]
    MismatchedFigureCounts {
        /// Name of the curve set.
        curve: String,
        /// Number of curves in the first set.
        expected: usize,
        /// Number of curves in the offending set.
        found: usize,
    },
    /// Returned when a requested data column exceeds the table width.
    #[error("curve '{curve}' selects column {column} but the table has {width} columns")]
    Column {
        /// Name of the curve.
        curve: String,
        /// Requested column.
        column: usize,
        /// Width of the table.
        width: usize,
    },
    /// Returned when a slice delimiter does not fit in a single byte.
    #[error("curve '{curve}' uses delimiter {delimiter:?}, which is not a single-byte character")]
    Delimiter {
        /// Name of the curve.
        curve: String,
        /// Rejected delimiter.
        delimiter: char,
    },
    /// Returned when inline rows are ragged.
    #[error("curve '{curve}' has ragged inline data")]
    RaggedData {
        /// Name of the curve.
        curve: String,
    },
    /// Returned when a slice directory cannot be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}
