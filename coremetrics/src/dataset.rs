//! Loading (score, label) datasets from files.
//!
//! Two layouts are accepted:
//!
//! - **CSV**: one `score,label` record per line, read with the `csv` crate
//!   (quoted fields, CRLF). Blank lines and lines starting with `#` are
//!   skipped, as is a first record whose score column is not a number (a
//!   header). Labels are `0`, `1`, `true` or `false`.
//! - **JSON**: `{"scores": [..], "labels": [..]}` with labels as booleans or
//!   0/1 integers.
//!
//! [`Samples::load`] picks the layout from the file extension (`.json` for
//! JSON, anything else is read as CSV).

use std::fs;
use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::{DatasetError, Result};

/// Parallel score and label columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    /// Classifier scores.
    pub scores: Vec<f32>,
    /// Ground-truth labels.
    pub labels: Vec<bool>,
}

#[derive(Deserialize)]
struct CsvRow {
    score: f32,
    #[serde(deserialize_with = "csv_label")]
    label: bool,
}

#[derive(Deserialize)]
struct JsonSamples {
    scores: Vec<f32>,
    labels: Vec<JsonLabel>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonLabel {
    Bool(bool),
    Int(u8),
}

impl JsonLabel {
    fn is_positive(&self) -> bool {
        match *self {
            Self::Bool(b) => b,
            Self::Int(i) => i != 0,
        }
    }
}

impl Samples {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of positive labels.
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }

    /// Reads a dataset file, choosing the layout by extension.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Read`] if the file cannot be read, or the
    /// parse error of the chosen layout.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DatasetError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let samples = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_csv(&text)?
        };

        tracing::debug!(
            path = %path.display(),
            samples = samples.len(),
            positives = samples.positives(),
            "loaded dataset"
        );
        Ok(samples)
    }

    /// Parses the JSON layout.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] on malformed JSON and
    /// [`DatasetError::LengthMismatch`] if the columns differ in length.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: JsonSamples =
            serde_json::from_str(text).map_err(|e| DatasetError::Json { source: e })?;
        if raw.scores.len() != raw.labels.len() {
            return Err(DatasetError::LengthMismatch {
                scores: raw.scores.len(),
                labels: raw.labels.len(),
            }
            .into());
        }
        Ok(Self {
            scores: raw.scores,
            labels: raw.labels.iter().map(JsonLabel::is_positive).collect(),
        })
    }

    /// Parses the CSV layout.
    ///
    /// Fields may be quoted and surrounded by whitespace; CRLF line endings
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MalformedRow`] with the 1-based line number of
    /// the first bad row.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut samples = Self::default();
        let mut seen_row = false;
        let mut record = StringRecord::new();

        while reader
            .read_record(&mut record)
            .map_err(|e| malformed(e.position().map_or(0, line_of), &e.to_string()))?
        {
            let line_no = record.position().map_or(0, line_of);
            if record.iter().all(str::is_empty) {
                continue;
            }
            if record.len() != 2 {
                return Err(malformed(line_no, "expected two columns: score,label"));
            }
            if !seen_row {
                seen_row = true;
                if record[0].parse::<f32>().is_err() {
                    // Header row.
                    continue;
                }
            }

            let row: CsvRow = record
                .deserialize(None)
                .map_err(|e| malformed(line_no, &e.to_string()))?;
            samples.scores.push(row.score);
            samples.labels.push(row.label);
        }

        Ok(samples)
    }

    /// Labels as the 0/1 bytes the compute functions take.
    pub fn label_bytes(&self) -> Vec<u8> {
        self.labels.iter().map(|&l| u8::from(l)).collect()
    }
}

fn parse_label(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

fn csv_label<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_label(&raw).ok_or_else(|| de::Error::custom(format!("bad label '{raw}'")))
}

fn line_of(position: &Position) -> usize {
    usize::try_from(position.line()).unwrap_or(usize::MAX)
}

fn malformed(line: usize, reason: &str) -> crate::error::CoreMetricsError {
    DatasetError::MalformedRow {
        line,
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreMetricsError;

    #[test]
    fn test_csv_with_header_and_comments() {
        let text = "# model v3 scores\nscore,label\n0.9,1\n\n0.2, 0\n0.5,true\n";
        let samples = Samples::from_csv(text).unwrap();
        assert_eq!(samples.scores, vec![0.9, 0.2, 0.5]);
        assert_eq!(samples.labels, vec![true, false, true]);
        assert_eq!(samples.positives(), 2);
        assert_eq!(samples.label_bytes(), vec![1, 0, 1]);
    }

    #[test]
    fn test_csv_without_header() {
        let samples = Samples::from_csv("0.1,0\n0.8,1").unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_csv_bad_rows() {
        assert!(matches!(
            Samples::from_csv("0.1,0\n0.8,maybe\n"),
            Err(CoreMetricsError::Dataset(DatasetError::MalformedRow { line: 2, .. }))
        ));
        assert!(matches!(
            Samples::from_csv("0.1,0\nabc,1\n"),
            Err(CoreMetricsError::Dataset(DatasetError::MalformedRow { line: 2, .. }))
        ));
        assert!(matches!(
            Samples::from_csv("0.1,0,extra\n"),
            Err(CoreMetricsError::Dataset(DatasetError::MalformedRow { line: 1, .. }))
        ));
    }

    #[test]
    fn test_csv_quoted_fields_and_crlf() {
        let text = "\"score\",\"label\"\r\n\"0.25\",\"1\"\r\n# skipped\r\n 0.75 , FALSE \r\n";
        let samples = Samples::from_csv(text).unwrap();
        assert_eq!(samples.scores, vec![0.25, 0.75]);
        assert_eq!(samples.labels, vec![true, false]);
    }

    #[test]
    fn test_csv_line_numbers_count_comments() {
        assert!(matches!(
            Samples::from_csv("# header comment\nscore,label\n0.1,0\n0.2,7\n"),
            Err(CoreMetricsError::Dataset(DatasetError::MalformedRow { line: 4, .. }))
        ));
    }

    #[test]
    fn test_json_labels_as_bools_or_ints() {
        let samples =
            Samples::from_json(r#"{"scores": [0.3, 0.7, 0.1], "labels": [true, 1, 0]}"#).unwrap();
        assert_eq!(samples.labels, vec![true, true, false]);
    }

    #[test]
    fn test_json_length_mismatch() {
        assert!(matches!(
            Samples::from_json(r#"{"scores": [0.3, 0.7], "labels": [true]}"#),
            Err(CoreMetricsError::Dataset(DatasetError::LengthMismatch {
                scores: 2,
                labels: 1
            }))
        ));
        assert!(matches!(
            Samples::from_json(r#"{"scores": [0.3]}"#),
            Err(CoreMetricsError::Dataset(DatasetError::Json { .. }))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("preds.JSON");
        std::fs::write(&json, r#"{"scores": [0.4], "labels": [false]}"#).unwrap();
        assert_eq!(Samples::load(&json).unwrap().len(), 1);

        let csv = dir.path().join("preds.csv");
        std::fs::write(&csv, "score,label\n0.4,0\n0.6,1\n").unwrap();
        assert_eq!(Samples::load(&csv).unwrap().len(), 2);

        assert!(matches!(
            Samples::load(dir.path().join("absent.csv")),
            Err(CoreMetricsError::Dataset(DatasetError::Read { .. }))
        ));
    }
}
