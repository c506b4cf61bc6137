//! Command-line argument parsing for the advisor
//!
//! The user contract is deliberately fixed: one dataset path, one
//! interactive surface, no tuning knobs. Clap still owns the binary
//! surface so `--help` and `--version` behave like any other CLI.

use clap::Parser;

/// AI Doctor - get medical advice from your symptoms, in the terminal
#[derive(Parser, Debug)]
#[command(name = "aidoctor")]
#[command(version)]
#[command(about = "Predicts disease, medicines, and diet from free-text symptoms", long_about = None)]
#[command(
    after_help = "The advisor trains on the bundled dataset at startup and then reads\n\
                  symptom descriptions interactively. For informational use only."
)]
pub struct Args {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_no_flags() {
        let args = Args::try_parse_from(["aidoctor"]);
        assert!(args.is_ok());
    }

    #[test]
    fn test_args_reject_unknown_flag() {
        let args = Args::try_parse_from(["aidoctor", "--model", "large"]);
        assert!(args.is_err());
    }
}
