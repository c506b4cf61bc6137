//! Interactive loop for the symptom advisor
//!
//! One request/response cycle at a time: a submitted line either runs a
//! built-in command or goes through the validation gate and, if
//! non-empty, triggers exactly one prediction plus report generation.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;

use crate::classifier::SymptomClassifier;
use crate::repl::commands::{is_command, CommandHandler};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;
pub use crate::repl::session::{CompletedRequest, SessionState};
use crate::report;

/// Warning shown for empty or whitespace-only submissions
pub const EMPTY_INPUT_WARNING: &str = "Please enter some symptoms.";

/// Outcome of one request cycle
#[derive(Debug)]
pub enum RequestOutcome {
    /// Input failed the validation gate; no prediction was made
    Rejected,
    /// Prediction and report were produced
    Completed(CompletedRequest),
}

/// Run one predict-and-render request cycle
///
/// Validation gate first: a trimmed-empty input is rejected without
/// touching the classifier. Otherwise predict exactly once and generate
/// the report for this request.
pub fn process_request(
    classifier: &SymptomClassifier,
    input: &str,
) -> crate::errors::Result<RequestOutcome> {
    let symptoms = input.trim();
    if symptoms.is_empty() {
        return Ok(RequestOutcome::Rejected);
    }

    let prediction = classifier.predict(symptoms)?;
    let report = report::generate(symptoms, &prediction)?;

    Ok(RequestOutcome::Completed(CompletedRequest {
        symptoms: symptoms.to_string(),
        prediction,
        report,
    }))
}

/// Interactive session coordinator
///
/// Owns the fitted classifier (read-only after startup), the input and
/// display handlers, and the single-request session state.
pub struct ReplSession {
    classifier: SymptomClassifier,
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session: SessionState,
    display: DisplayManager,
}

impl ReplSession {
    /// Create a session around an already-fitted classifier
    pub fn new(classifier: SymptomClassifier) -> Result<Self> {
        let input_handler = match history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(ReplSession {
            classifier,
            input_handler,
            command_handler: CommandHandler::new(),
            session: SessionState::new(),
            display: DisplayManager::new(),
        })
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str, training_rows: usize) {
        self.display.show_banner(version, training_rows);
    }

    /// Run the read-eval-print loop until exit or EOF
    pub fn run(&mut self) -> Result<()> {
        loop {
            let line = match self.input_handler.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    // Ctrl-C ends the session like /exit does.
                    if err.to_string() == "Interrupted" {
                        break;
                    }
                    return Err(err);
                }
            };

            if !self.handle_input(&line)? {
                break;
            }
        }

        self.input_handler.save_history()?;
        self.display.show_disclaimer();
        Ok(())
    }

    /// Handle user input (command or symptom request)
    ///
    /// Returns true if the session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        if is_command(input) {
            let command = self.command_handler.parse(input);
            return self.command_handler.execute(
                command,
                &self.session,
                &self.display,
                self.classifier.vocabulary(),
            );
        }

        match process_request(&self.classifier, input)? {
            RequestOutcome::Rejected => {
                self.display.show_warning(EMPTY_INPUT_WARNING);
            }
            RequestOutcome::Completed(request) => {
                self.display
                    .show_prediction(&request.symptoms, &request.prediction);
                self.session.record(request);
            }
        }

        Ok(true)
    }

    /// Session state (current request, counters)
    pub fn session(&self) -> &SessionState {
        &self.session
    }
}

/// History file location: ~/.aidoctor_history
fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aidoctor_history"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, TrainingRow};

    fn classifier() -> SymptomClassifier {
        let dataset = Dataset::from_rows(vec![
            TrainingRow {
                symptoms: "headache, sore throat, sneezing".to_string(),
                disease: "Common Cold".to_string(),
                medicine_en: "Cetirizine".to_string(),
                medicine_ayurvedic: "Sitopaladi Churna".to_string(),
                diet: "Warm fluids".to_string(),
            },
            TrainingRow {
                symptoms: "wheezing, chest tightness".to_string(),
                disease: "Asthma".to_string(),
                medicine_en: "Salbutamol".to_string(),
                medicine_ayurvedic: "Vasaka Syrup".to_string(),
                diet: "Avoid cold food".to_string(),
            },
        ]);
        SymptomClassifier::fit(&dataset).unwrap()
    }

    #[test]
    fn test_process_request_rejects_empty_input() {
        let outcome = process_request(&classifier(), "").unwrap();
        assert!(matches!(outcome, RequestOutcome::Rejected));
    }

    #[test]
    fn test_process_request_rejects_whitespace_input() {
        let outcome = process_request(&classifier(), "   ").unwrap();
        assert!(matches!(outcome, RequestOutcome::Rejected));
    }

    #[test]
    fn test_process_request_completes_for_symptoms() {
        let outcome = process_request(&classifier(), "headache and sneezing").unwrap();
        match outcome {
            RequestOutcome::Completed(request) => {
                assert_eq!(request.symptoms, "headache and sneezing");
                assert_eq!(request.prediction.disease, "Common Cold");
                assert!(!request.report.is_empty());
            }
            RequestOutcome::Rejected => panic!("expected a completed request"),
        }
    }

    #[test]
    fn test_process_request_trims_input() {
        let outcome = process_request(&classifier(), "  wheezing  ").unwrap();
        match outcome {
            RequestOutcome::Completed(request) => {
                assert_eq!(request.symptoms, "wheezing");
            }
            RequestOutcome::Rejected => panic!("expected a completed request"),
        }
    }
}
