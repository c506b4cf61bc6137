//! Built-in slash commands for the advisor loop

use anyhow::Result;
use colored::*;

use crate::dataset::LabelVocabulary;
use crate::repl::display::DisplayManager;
use crate::repl::session::SessionState;
use crate::report::REPORT_FILE_NAME;

/// Advisor command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Save,
    Labels,
    Clear,
    Exit,
    Unknown { input: String },
}

/// Check whether an input line is a command rather than a symptom request
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Command handler for parsing and executing built-in commands
pub struct CommandHandler;

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "save" | "report" => Command::Save,
            "labels" => Command::Labels,
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the loop should continue, false if it should exit
    pub fn execute(
        &self,
        command: Command,
        session: &SessionState,
        display: &DisplayManager,
        vocabulary: &LabelVocabulary,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(false)
            }
            Command::Save => {
                // Export is scoped to the one current completed request.
                match session.current() {
                    Some(request) => {
                        std::fs::write(REPORT_FILE_NAME, &request.report)?;
                        display.show_saved(REPORT_FILE_NAME);
                    }
                    None => {
                        display.show_warning("No prediction yet. Enter symptoms first.");
                    }
                }
                Ok(true)
            }
            Command::Labels => {
                display.show_labels(vocabulary);
                Ok(true)
            }
            Command::Clear => {
                display.clear_screen()?;
                Ok(true)
            }
            Command::Unknown { input } => {
                display.show_warning(&format!(
                    "Unknown command '{}'. Type /help for available commands.",
                    input.trim()
                ));
                Ok(true)
            }
        }
    }

    /// Show available commands
    fn show_help(&self) {
        println!("\n{}", "Available commands:".bold().cyan());
        println!("  {}   Show this help", "/help".green());
        println!(
            "  {}   Save the last prediction as {}",
            "/save".green(),
            REPORT_FILE_NAME
        );
        println!("  {} List the label values the classifier can predict", "/labels".green());
        println!("  {}  Clear the screen", "/clear".green());
        println!("  {}   Quit the advisor", "/exit".green());
        println!("\nAnything else is treated as a symptom description.\n");
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
