//! Text-classification pipeline: TF-IDF vectorizer + four
//! nearest-centroid label heads
//!
//! Fit once at startup on the training table; read-only afterwards.

pub mod model;
pub mod types;
pub mod vectorizer;

pub use model::SymptomClassifier;
pub use types::Prediction;
pub use vectorizer::TfidfVectorizer;
