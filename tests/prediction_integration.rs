//! End-to-end tests for the predict-and-render request cycle
//!
//! Trains on the bundled dataset exactly as the binary does at startup.

use std::path::PathBuf;
use std::sync::OnceLock;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use aidoctor::repl::{process_request, RequestOutcome, SessionState};
use aidoctor::{Dataset, SymptomClassifier};

fn dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/indian_medicine_dataset.csv")
}

fn classifier() -> &'static SymptomClassifier {
    static CLASSIFIER: OnceLock<SymptomClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(|| {
        let dataset = Dataset::load(dataset_path()).expect("bundled dataset must load");
        SymptomClassifier::fit(&dataset).expect("classifier must fit on bundled dataset")
    })
}

#[test]
fn test_bundled_dataset_loads() {
    let dataset = Dataset::load(dataset_path()).unwrap();
    assert!(dataset.len() >= 30);
    assert!(!dataset.vocabulary().diseases.is_empty());
}

#[test]
fn test_headache_scenario_produces_known_labels() {
    let outcome = process_request(classifier(), "headache, sore throat, fatigue, sneezing")
        .unwrap();

    let request = match outcome {
        RequestOutcome::Completed(request) => request,
        RequestOutcome::Rejected => panic!("non-empty input must not be rejected"),
    };

    let vocab = classifier().vocabulary();
    assert!(!request.prediction.disease.is_empty());
    assert!(vocab.diseases.contains(&request.prediction.disease));
    assert!(vocab.medicines_en.contains(&request.prediction.medicine_en));
    assert!(vocab
        .medicines_ayurvedic
        .contains(&request.prediction.medicine_ayurvedic));
    assert!(vocab.diets.contains(&request.prediction.diet));
    assert!(!request.report.is_empty());
}

#[test]
fn test_whitespace_input_yields_no_prediction() {
    let outcome = process_request(classifier(), "   ").unwrap();
    assert!(matches!(outcome, RequestOutcome::Rejected));
}

#[test]
fn test_second_request_replaces_first() {
    let mut session = SessionState::new();

    for input in ["headache, sore throat, sneezing", "frequent urination, excessive thirst"] {
        match process_request(classifier(), input).unwrap() {
            RequestOutcome::Completed(request) => session.record(request),
            RequestOutcome::Rejected => panic!("input '{input}' must complete"),
        }
    }

    let current = session.current().unwrap();
    assert_eq!(current.symptoms, "frequent urination, excessive thirst");
    assert!(!current.symptoms.contains("headache"));
    assert_eq!(session.request_count(), 2);
}

#[test]
fn test_rejected_request_does_not_touch_session() {
    let mut session = SessionState::new();

    if let RequestOutcome::Completed(request) =
        process_request(classifier(), "wheezing at night").unwrap()
    {
        session.record(request);
    }
    let before = session.request_count();

    // Warning path: no prediction, no recording.
    assert!(matches!(
        process_request(classifier(), "\t \n").unwrap(),
        RequestOutcome::Rejected
    ));
    assert_eq!(session.request_count(), before);
    assert_eq!(session.current().unwrap().symptoms, "wheezing at night");
}

#[test]
fn test_prediction_is_deterministic_across_requests() {
    let input = "fever with shivering and headache";
    let first = classifier().predict(input).unwrap();
    let second = classifier().predict(input).unwrap();
    assert_eq!(first, second);
}

#[quickcheck]
fn prop_predictions_closed_over_training_vocabulary(input: String) -> TestResult {
    if input.trim().is_empty() {
        return TestResult::discard();
    }

    let prediction = match classifier().predict(&input) {
        Ok(prediction) => prediction,
        Err(err) => return TestResult::error(err.to_string()),
    };

    let vocab = classifier().vocabulary();
    TestResult::from_bool(
        vocab.diseases.contains(&prediction.disease)
            && vocab.medicines_en.contains(&prediction.medicine_en)
            && vocab
                .medicines_ayurvedic
                .contains(&prediction.medicine_ayurvedic)
            && vocab.diets.contains(&prediction.diet),
    )
}
