//! AI Doctor - Terminal Symptom Advisor
//!
//! Trains a text-classification pipeline on a fixed symptom dataset at
//! startup, then serves one interactive predict-and-render request at a
//! time, with DOCX report export.
//!
//! # Architecture
//!
//! - `dataset`: CSV training table, loaded once
//! - `classifier`: TF-IDF vectorizer + four nearest-centroid label heads
//! - `repl`: interactive loop, validation gate, display, commands
//! - `report`: deterministic DOCX report generation

pub mod classifier;
pub mod cli;
pub mod dataset;
pub mod errors;
pub mod repl;
pub mod report;

// Re-export commonly used types
pub use classifier::{Prediction, SymptomClassifier};
pub use dataset::{Dataset, LabelVocabulary, TrainingRow};
pub use errors::{AdvisorError, Result};
