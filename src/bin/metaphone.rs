//! metaphone - Phonetic encoding for approximate name matching
//!
//! Provides CLI utilities for encoding words with Double Metaphone,
//! Refined Soundex, and NYSIIS, and for comparing words by sound.

use clap::Parser;
use colored::Colorize;
use std::process;

use libmetaphone::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
