//! TF-IDF vectorizer for symptom text
//!
//! Turns free text into dense L2-normalized term vectors over the
//! vocabulary observed at fit time. Unseen tokens are dropped silently,
//! so out-of-vocabulary input degrades to a sparse (possibly zero)
//! vector rather than an error.

use std::collections::{BTreeSet, HashMap};

use crate::errors::{AdvisorError, Result};

/// TF-IDF vectorizer fitted on a fixed corpus
///
/// Vocabulary indices are assigned in sorted token order, so fitting the
/// same corpus always yields the same vector layout.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Fit the vectorizer on a corpus of documents
    ///
    /// Errors with [`AdvisorError::EmptyVocabulary`] if tokenization
    /// yields no terms at all.
    pub fn fit(corpus: &[&str]) -> Result<Self> {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        // Sorted token order keeps vector layout deterministic.
        let terms: BTreeSet<&String> = tokenized.iter().flatten().collect();
        if terms.is_empty() {
            return Err(AdvisorError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
        let total_docs = corpus.len() as f32;
        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<&String> = tokens.iter().collect();
            for token in unique {
                if let Some(&index) = vocabulary.get(token) {
                    document_frequency[index] += 1;
                }
            }
        }
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + total_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Ok(TfidfVectorizer { vocabulary, idf })
    }

    /// Transform a text into a dense L2-normalized TF-IDF vector
    ///
    /// Tokens outside the fitted vocabulary are ignored; a text with no
    /// known tokens maps to the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }

        for (index, weight) in vector.iter_mut().enumerate() {
            *weight *= self.idf[index];
        }

        let norm = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }

    /// Number of terms in the fitted vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Lowercase alphanumeric tokenization
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Cosine similarity between two equal-length vectors
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
