//! Multi-output nearest-centroid classifier over TF-IDF vectors
//!
//! One independent head per label column: each head averages the TF-IDF
//! vectors of the training texts sharing a label value and predicts the
//! label whose centroid is most cosine-similar to the input. The four
//! heads never consult each other, so predicted fields may recombine in
//! ways no single training row contains.

use std::collections::BTreeMap;

use crate::classifier::types::Prediction;
use crate::classifier::vectorizer::{cosine_similarity, TfidfVectorizer};
use crate::dataset::{Dataset, LabelVocabulary};
use crate::errors::Result;

/// Nearest-centroid head for one label column
#[derive(Debug, Clone)]
struct LabelHead {
    /// Label values in sorted order, paired with their centroid vectors
    labels: Vec<String>,
    centroids: Vec<Vec<f32>>,
}

impl LabelHead {
    /// Average the vectors belonging to each label value
    ///
    /// Labels are grouped in sorted order so head layout, and therefore
    /// tie-breaking, is deterministic across fits.
    fn fit(vectors: &[Vec<f32>], values: &[&str], dimensions: usize) -> Self {
        let mut groups: BTreeMap<&str, (Vec<f32>, usize)> = BTreeMap::new();
        for (vector, &value) in vectors.iter().zip(values.iter()) {
            let entry = groups
                .entry(value)
                .or_insert_with(|| (vec![0.0; dimensions], 0));
            for (sum, weight) in entry.0.iter_mut().zip(vector.iter()) {
                *sum += weight;
            }
            entry.1 += 1;
        }

        let mut labels = Vec::with_capacity(groups.len());
        let mut centroids = Vec::with_capacity(groups.len());
        for (value, (mut sum, count)) in groups {
            for weight in &mut sum {
                *weight /= count as f32;
            }
            labels.push(value.to_string());
            centroids.push(sum);
        }

        LabelHead { labels, centroids }
    }

    /// Label with the highest cosine similarity to the input vector
    ///
    /// Ties (including the all-zero vector from out-of-vocabulary input)
    /// resolve to the first label in sorted order. There is no rejection
    /// path: some label is always returned.
    fn predict(&self, vector: &[f32]) -> String {
        let mut best_index = 0;
        let mut best_score = f32::MIN;
        for (index, centroid) in self.centroids.iter().enumerate() {
            let score = cosine_similarity(vector, centroid);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        self.labels[best_index].clone()
    }
}

/// Trained symptom classifier: shared vectorizer plus four label heads
///
/// Fitted exactly once at startup and read-only afterwards.
pub struct SymptomClassifier {
    vectorizer: TfidfVectorizer,
    disease_head: LabelHead,
    medicine_en_head: LabelHead,
    medicine_ayurvedic_head: LabelHead,
    diet_head: LabelHead,
    vocabulary: LabelVocabulary,
}

impl SymptomClassifier {
    /// Fit the pipeline on the training table
    ///
    /// Synchronous and blocking; the process serves no requests until it
    /// returns. Fails if the corpus yields no vocabulary.
    pub fn fit(dataset: &Dataset) -> Result<Self> {
        let texts = dataset.symptom_texts();
        let vectorizer = TfidfVectorizer::fit(&texts)?;
        let dimensions = vectorizer.vocabulary_len();

        let vectors: Vec<Vec<f32>> =
            texts.iter().map(|text| vectorizer.transform(text)).collect();

        let rows = dataset.rows();
        let diseases: Vec<&str> = rows.iter().map(|r| r.disease.as_str()).collect();
        let medicines_en: Vec<&str> = rows.iter().map(|r| r.medicine_en.as_str()).collect();
        let medicines_ayurvedic: Vec<&str> =
            rows.iter().map(|r| r.medicine_ayurvedic.as_str()).collect();
        let diets: Vec<&str> = rows.iter().map(|r| r.diet.as_str()).collect();

        Ok(SymptomClassifier {
            disease_head: LabelHead::fit(&vectors, &diseases, dimensions),
            medicine_en_head: LabelHead::fit(&vectors, &medicines_en, dimensions),
            medicine_ayurvedic_head: LabelHead::fit(&vectors, &medicines_ayurvedic, dimensions),
            diet_head: LabelHead::fit(&vectors, &diets, dimensions),
            vocabulary: dataset.vocabulary(),
            vectorizer,
        })
    }

    /// Predict the four labels for one symptom text
    ///
    /// Deterministic for a given fitted state and input string. The
    /// caller's validation gate guarantees the input is non-empty;
    /// nonsensical input still yields some prediction (silent
    /// degradation, no "unknown" category).
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let vector = self.vectorizer.transform(text);

        Prediction::new(
            self.disease_head.predict(&vector),
            self.medicine_en_head.predict(&vector),
            self.medicine_ayurvedic_head.predict(&vector),
            self.diet_head.predict(&vector),
            &self.vocabulary,
        )
    }

    /// Label sets observed at fit time
    pub fn vocabulary(&self) -> &LabelVocabulary {
        &self.vocabulary
    }
}
