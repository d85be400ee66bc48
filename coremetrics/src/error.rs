//! Error types for the coremetrics ROC/AUC engine.
//!
//! Compute failures are deterministic functions of the inputs and are
//! detected before any output is written. Each one maps onto a stable
//! integer [`StatusCode`] so the same taxonomy can cross the C ABI.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for all coremetrics operations.
#[derive(Error, Debug)]
pub enum CoreMetricsError {
    /// Input validation failed before the curve was computed.
    #[error("compute error: {0}")]
    Compute(#[from] ComputeError),

    /// A configuration value or file was invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A dataset file could not be read or parsed.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

impl CoreMetricsError {
    /// Returns the status code for compute failures, `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Compute(e) => Some(e.status()),
            Self::Config(_) | Self::Dataset(_) => None,
        }
    }
}

/// Errors detected by the input validator.
///
/// All of these are raised before the output buffer is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// A required input collection is absent.
    #[error("required input is absent: {input}")]
    NullInput {
        /// Which input was missing.
        input: &'static str,
    },

    /// The inputs are empty or their lengths disagree.
    #[error("invalid sample count: {scores} scores, {labels} labels")]
    InvalidCount {
        /// Number of scores supplied.
        scores: usize,
        /// Number of labels supplied.
        labels: usize,
    },

    /// The bucket count for binned mode is not positive.
    #[error("invalid bucket count: {buckets} (must be > 0)")]
    InvalidBucketCount {
        /// The rejected bucket count.
        buckets: i32,
    },

    /// The caller's output buffer cannot hold the worst-case point count.
    #[error("output buffer holds {capacity} points, {required} required")]
    InsufficientOutputCapacity {
        /// Points the requested mode may emit.
        required: usize,
        /// Points the caller's buffer can hold.
        capacity: usize,
    },
}

impl ComputeError {
    /// Returns the integer status code for this failure.
    pub fn status(&self) -> StatusCode {
        StatusCode::from(self)
    }
}

/// Errors that can occur while building or loading a [`crate::RocConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Binned mode was requested with a non-positive bucket count.
    #[error("invalid bucket count in config: {buckets} (must be > 0)")]
    InvalidBuckets {
        /// The rejected bucket count.
        buckets: i32,
    },

    /// The config file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Load {
        /// The config file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for a `RocConfig`.
    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        /// The config file path.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while loading a (score, label) dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset '{}': {source}", path.display())]
    Read {
        /// The dataset file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A CSV row is malformed.
    #[error("line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number of the bad row.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// The JSON document does not match the dataset layout.
    #[error("malformed JSON dataset: {source}")]
    Json {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document has different numbers of scores and labels.
    #[error("dataset has {scores} scores but {labels} labels")]
    LengthMismatch {
        /// Number of scores in the document.
        scores: usize,
        /// Number of labels in the document.
        labels: usize,
    },
}

/// Integer status codes shared with the C ABI.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// The call succeeded.
    Ok = 0,
    /// A required input was absent.
    NullInput = 1,
    /// Empty input or mismatched lengths.
    InvalidCount = 2,
    /// Non-positive bucket count.
    InvalidBucketCount = 3,
    /// Output buffer too small.
    InsufficientOutputCapacity = 4,
}

impl StatusCode {
    /// Returns the raw integer value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&ComputeError> for StatusCode {
    fn from(err: &ComputeError) -> Self {
        match err {
            ComputeError::NullInput { .. } => Self::NullInput,
            ComputeError::InvalidCount { .. } => Self::InvalidCount,
            ComputeError::InvalidBucketCount { .. } => Self::InvalidBucketCount,
            ComputeError::InsufficientOutputCapacity { .. } => Self::InsufficientOutputCapacity,
        }
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = i32;

    fn try_from(raw: i32) -> std::result::Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Ok),
            1 => Ok(Self::NullInput),
            2 => Ok(Self::InvalidCount),
            3 => Ok(Self::InvalidBucketCount),
            4 => Ok(Self::InsufficientOutputCapacity),
            other => Err(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "ok",
            Self::NullInput => "null input",
            Self::InvalidCount => "invalid count",
            Self::InvalidBucketCount => "invalid bucket count",
            Self::InsufficientOutputCapacity => "insufficient output capacity",
        };
        write!(f, "{name} ({})", self.as_i32())
    }
}

/// Type alias for `Result<T, CoreMetricsError>`.
pub type Result<T> = std::result::Result<T, CoreMetricsError>;
