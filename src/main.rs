//! AI Doctor - main entry point
//!
//! Startup is strictly sequential: parse args, load the fixed dataset,
//! fit the classifier (blocking, with a spinner), then hand control to
//! the interactive loop. Any startup failure is fatal.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use aidoctor::cli::Args;
use aidoctor::dataset::{Dataset, DATASET_PATH};
use aidoctor::repl::{DisplayManager, ReplSession};
use aidoctor::SymptomClassifier;

fn main() -> Result<()> {
    let _args = Args::parse();
    let display = DisplayManager::new();

    let dataset = Dataset::load(DATASET_PATH)
        .with_context(|| format!("failed to load training dataset from '{}'", DATASET_PATH))?;

    let spinner = display.start_training();
    let started = Instant::now();
    let classifier =
        SymptomClassifier::fit(&dataset).context("failed to train symptom classifier")?;
    display.finish_training(spinner, dataset.len(), started.elapsed().as_millis() as u64);

    let mut session = ReplSession::new(classifier)?;
    session.show_welcome(env!("CARGO_PKG_VERSION"), dataset.len());
    session.run()
}
