//! Display manager for the advisor terminal UI
//!
//! Color-coded output for the banner, the training spinner, the result
//! box, and warning/error messages.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

use crate::classifier::Prediction;
use crate::dataset::LabelVocabulary;
use crate::report::REPORT_FILE_NAME;

/// Display manager for the advisor UI
pub struct DisplayManager {
    spinner_interval: Duration,
}

impl DisplayManager {
    /// Create new display manager
    pub fn new() -> Self {
        DisplayManager {
            spinner_interval: Duration::from_millis(100),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, training_rows: usize) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  AI Doctor {} - Medical Advice from Your Symptoms", version);
        let info = format!("  Training rows: {} | Mode: interactive", training_rows);
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
        println!(
            "Describe your symptoms (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Show the closing disclaimer
    pub fn show_disclaimer(&self) {
        println!(
            "\n{}",
            "For informational use only. Always consult a certified medical professional."
                .dimmed()
        );
    }

    /// Spinner shown while the classifier fit runs at startup
    pub fn start_training(&self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Training classifier on symptom dataset...");
        pb.enable_steady_tick(self.spinner_interval);
        pb
    }

    /// Finish the training spinner with a success line
    pub fn finish_training(&self, pb: ProgressBar, rows: usize, duration_ms: u64) {
        pb.finish_and_clear();
        println!(
            "{} Classifier trained on {} rows {}",
            "✓".green(),
            rows,
            format!("({}ms)", duration_ms).dimmed()
        );
    }

    /// Display one completed prediction alongside the original input
    pub fn show_prediction(&self, symptoms: &str, prediction: &Prediction) {
        println!("\n{} {}", "✓".green().bold(), "Prediction complete".green().bold());
        println!("\n{}", "Predicted Diagnosis".bold().cyan());
        println!("{}", "-".repeat(60).cyan());
        println!("  {} {}", "Symptoms:".bold(), symptoms);
        println!("  {} {}", "Disease:".bold(), prediction.disease.yellow());
        println!(
            "  {} {}",
            "English Medicine:".bold(),
            prediction.medicine_en.yellow()
        );
        println!(
            "  {} {}",
            "Ayurvedic Medicine:".bold(),
            prediction.medicine_ayurvedic.yellow()
        );
        println!(
            "  {} {}",
            "Diet Recommendation:".bold(),
            prediction.diet.yellow()
        );
        println!(
            "\nType {} to export this result as {}\n",
            "/save".green(),
            REPORT_FILE_NAME
        );
    }

    /// List the label values known to the classifier
    pub fn show_labels(&self, vocabulary: &LabelVocabulary) {
        self.show_section("Known diseases");
        for disease in &vocabulary.diseases {
            println!("  {} {}", "•".cyan(), disease);
        }
        self.show_section("Known English medicines");
        for medicine in &vocabulary.medicines_en {
            println!("  {} {}", "•".cyan(), medicine);
        }
        self.show_section("Known Ayurvedic medicines");
        for medicine in &vocabulary.medicines_ayurvedic {
            println!("  {} {}", "•".cyan(), medicine);
        }
        self.show_section("Known diet recommendations");
        for diet in &vocabulary.diets {
            println!("  {} {}", "•".cyan(), diet);
        }
        println!();
    }

    /// Confirmation after the report file is written
    pub fn show_saved(&self, path: &str) {
        println!("{} Report saved to {}", "✓".green(), path.bold());
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
