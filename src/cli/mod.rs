//! CLI surface for the advisor binary

pub mod args;

pub use args::Args;
