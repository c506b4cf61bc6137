//! Dataset loader for the symptom-to-treatment training table
//!
//! Reads the fixed CSV source into memory exactly once at startup.
//! The table is read-only for the process lifetime; there is no reload
//! path and no partial-availability state.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{AdvisorError, Result};

/// Fixed path of the training table, relative to the working directory
pub const DATASET_PATH: &str = "data/indian_medicine_dataset.csv";

/// Columns the training table must carry, in no particular order
const REQUIRED_COLUMNS: &[&str] = &[
    "Symptoms",
    "Disease Name",
    "English Medicine Name",
    "Ayurvedic Medicine Name",
    "Diet Recommendation",
];

/// One historical (symptom text -> four labels) training example
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingRow {
    /// Free-text symptom description, the sole model input
    #[serde(rename = "Symptoms")]
    pub symptoms: String,

    /// Disease label
    #[serde(rename = "Disease Name")]
    pub disease: String,

    /// English (allopathic) medicine label
    #[serde(rename = "English Medicine Name")]
    pub medicine_en: String,

    /// Ayurvedic medicine label
    #[serde(rename = "Ayurvedic Medicine Name")]
    pub medicine_ayurvedic: String,

    /// Diet recommendation label
    #[serde(rename = "Diet Recommendation")]
    pub diet: String,
}

/// Per-column sets of label values observed in training
///
/// Predictions are validated against these sets at construction time,
/// making the closed-label invariant explicit.
#[derive(Debug, Clone)]
pub struct LabelVocabulary {
    pub diseases: BTreeSet<String>,
    pub medicines_en: BTreeSet<String>,
    pub medicines_ayurvedic: BTreeSet<String>,
    pub diets: BTreeSet<String>,
}

impl LabelVocabulary {
    /// Collect the per-column label sets from training rows
    pub fn from_rows(rows: &[TrainingRow]) -> Self {
        LabelVocabulary {
            diseases: rows.iter().map(|r| r.disease.clone()).collect(),
            medicines_en: rows.iter().map(|r| r.medicine_en.clone()).collect(),
            medicines_ayurvedic: rows
                .iter()
                .map(|r| r.medicine_ayurvedic.clone())
                .collect(),
            diets: rows.iter().map(|r| r.diet.clone()).collect(),
        }
    }

    /// Total number of distinct label values across all four columns
    pub fn total_labels(&self) -> usize {
        self.diseases.len()
            + self.medicines_en.len()
            + self.medicines_ayurvedic.len()
            + self.diets.len()
    }
}

/// In-memory training table
///
/// Loaded once via [`Dataset::load`]; rows are immutable afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<TrainingRow>,
}

impl Dataset {
    /// Load the training table from a CSV file
    ///
    /// Fatal error conditions:
    /// - file missing or unreadable
    /// - header missing any required column
    /// - zero data rows
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;

        // Validate the header up front so a missing column is reported by
        // name instead of as a per-row deserialization failure.
        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(AdvisorError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: TrainingRow = record?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(AdvisorError::EmptyDataset {
                path: path.display().to_string(),
            });
        }

        Ok(Dataset { rows })
    }

    /// Build a dataset from rows already in memory
    ///
    /// Used when the table does not come from the fixed CSV source,
    /// e.g. in tests.
    pub fn from_rows(rows: Vec<TrainingRow>) -> Self {
        Dataset { rows }
    }

    /// All training rows
    pub fn rows(&self) -> &[TrainingRow] {
        &self.rows
    }

    /// Number of training rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows (never true after a successful load)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The symptom texts, in row order
    pub fn symptom_texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.symptoms.as_str()).collect()
    }

    /// Per-column label sets observed in this table
    pub fn vocabulary(&self) -> LabelVocabulary {
        LabelVocabulary::from_rows(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const VALID_CSV: &str = "\
Symptoms,Disease Name,English Medicine Name,Ayurvedic Medicine Name,Diet Recommendation
\"headache, fever\",Flu,Paracetamol,Sudarshan Vati,Warm fluids
\"cough, wheeze\",Asthma,Salbutamol,Vasaka Syrup,Avoid cold food
";

    #[test]
    fn test_load_valid_dataset() {
        let file = write_csv(VALID_CSV);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].disease, "Flu");
        assert_eq!(dataset.rows()[1].medicine_ayurvedic, "Vasaka Syrup");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dataset::load("does/not/exist.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_column() {
        let file = write_csv(
            "Symptoms,Disease Name,English Medicine Name,Diet Recommendation\n\
             \"headache\",Flu,Paracetamol,Warm fluids\n",
        );
        let err = Dataset::load(file.path()).unwrap_err();
        match err {
            AdvisorError::MissingColumn { column } => {
                assert_eq!(column, "Ayurvedic Medicine Name");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_table() {
        let file = write_csv(
            "Symptoms,Disease Name,English Medicine Name,Ayurvedic Medicine Name,Diet Recommendation\n",
        );
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, AdvisorError::EmptyDataset { .. }));
    }

    #[test]
    fn test_symptom_texts_in_row_order() {
        let file = write_csv(VALID_CSV);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(
            dataset.symptom_texts(),
            vec!["headache, fever", "cough, wheeze"]
        );
    }

    #[test]
    fn test_vocabulary_collects_all_columns() {
        let file = write_csv(VALID_CSV);
        let vocab = Dataset::load(file.path()).unwrap().vocabulary();
        assert!(vocab.diseases.contains("Flu"));
        assert!(vocab.diseases.contains("Asthma"));
        assert!(vocab.medicines_en.contains("Salbutamol"));
        assert!(vocab.medicines_ayurvedic.contains("Sudarshan Vati"));
        assert!(vocab.diets.contains("Warm fluids"));
        assert_eq!(vocab.total_labels(), 8);
    }

    #[test]
    fn test_vocabulary_deduplicates() {
        let file = write_csv(
            "Symptoms,Disease Name,English Medicine Name,Ayurvedic Medicine Name,Diet Recommendation\n\
             \"a\",Flu,Paracetamol,Sudarshan Vati,Warm fluids\n\
             \"b\",Flu,Paracetamol,Sudarshan Vati,Warm fluids\n",
        );
        let vocab = Dataset::load(file.path()).unwrap().vocabulary();
        assert_eq!(vocab.diseases.len(), 1);
        assert_eq!(vocab.total_labels(), 4);
    }
}
