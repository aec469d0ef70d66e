//! CLI interface for libmetaphone
//!
//! Provides command-line utilities for encoding and comparing words.

pub mod args;
pub mod commands;

pub use args::{AlgorithmChoice, Cli, Commands};
