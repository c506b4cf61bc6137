//! Prediction record produced by the classifier

use serde::Serialize;

use crate::dataset::LabelVocabulary;
use crate::errors::{AdvisorError, Result};

/// Four-field output record for one symptom request
///
/// Each field is predicted independently per label column, so the four
/// values may recombine in ways never seen together in training. Every
/// field is still guaranteed to be a value observed in its own column
/// (closed-label classification), enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub disease: String,
    pub medicine_en: String,
    pub medicine_ayurvedic: String,
    pub diet: String,
}

impl Prediction {
    /// Build a prediction, validating each field against the training
    /// vocabulary for its column
    pub fn new(
        disease: String,
        medicine_en: String,
        medicine_ayurvedic: String,
        diet: String,
        vocabulary: &LabelVocabulary,
    ) -> Result<Self> {
        if !vocabulary.diseases.contains(&disease) {
            return Err(AdvisorError::UnknownLabel {
                field: "disease",
                value: disease,
            });
        }
        if !vocabulary.medicines_en.contains(&medicine_en) {
            return Err(AdvisorError::UnknownLabel {
                field: "English medicine",
                value: medicine_en,
            });
        }
        if !vocabulary.medicines_ayurvedic.contains(&medicine_ayurvedic) {
            return Err(AdvisorError::UnknownLabel {
                field: "Ayurvedic medicine",
                value: medicine_ayurvedic,
            });
        }
        if !vocabulary.diets.contains(&diet) {
            return Err(AdvisorError::UnknownLabel {
                field: "diet",
                value: diet,
            });
        }

        Ok(Prediction {
            disease,
            medicine_en,
            medicine_ayurvedic,
            diet,
        })
    }
}
