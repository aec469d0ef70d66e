//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::encoder::Encoder;
use crate::metaphone::DoubleMetaphone;
use crate::nysiis::Nysiis;
use crate::soundex::RefinedSoundex;

use super::args::{AlgorithmChoice, Commands};

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Encode {
            words,
            input,
            algorithm,
            code_size,
            no_trim,
        } => cmd_encode(words, input, algorithm, code_size, no_trim),
        Commands::Compare {
            first,
            second,
            algorithm,
            alternate,
        } => cmd_compare(&first, &second, algorithm, alternate),
    }
}

/// Encode command
fn cmd_encode(
    mut words: Vec<String>,
    input: Option<PathBuf>,
    algorithm: AlgorithmChoice,
    code_size: usize,
    no_trim: bool,
) -> Result<()> {
    if let Some(path) = input {
        words.extend(load_words(&path)?);
    }
    if words.is_empty() {
        bail!("no words to encode; pass them as arguments or via --input");
    }

    match algorithm {
        AlgorithmChoice::DoubleMetaphone => {
            let encoder = DoubleMetaphone::with_code_size(code_size)?;
            for word in &words {
                let result = encoder.double_metaphone(word);
                println!(
                    "{}\t{}\t{}",
                    word.cyan(),
                    result.primary().green(),
                    result.secondary().green()
                );
            }
        }
        AlgorithmChoice::RefinedSoundex => {
            let encoder = RefinedSoundex;
            for word in &words {
                println!("{}\t{}", word.cyan(), encoder.refined_soundex(word).green());
            }
        }
        AlgorithmChoice::Nysiis => {
            let encoder = Nysiis::with_trim(!no_trim);
            for word in &words {
                println!("{}\t{}", word.cyan(), encoder.nysiis(word).green());
            }
        }
    }

    Ok(())
}

/// Compare command
fn cmd_compare(
    first: &str,
    second: &str,
    algorithm: AlgorithmChoice,
    alternate: bool,
) -> Result<()> {
    let (first_code, second_code, equal) = match algorithm {
        AlgorithmChoice::DoubleMetaphone => {
            let encoder = DoubleMetaphone::new();
            let left = encoder.double_metaphone(first);
            let right = encoder.double_metaphone(second);
            let codes = if alternate {
                (left.secondary().to_string(), right.secondary().to_string())
            } else {
                (left.primary().to_string(), right.primary().to_string())
            };
            let equal = encoder.is_double_metaphone_equals(first, second, alternate);
            (codes.0, codes.1, equal)
        }
        AlgorithmChoice::RefinedSoundex => {
            let encoder = RefinedSoundex;
            (
                encoder.encode(first),
                encoder.encode(second),
                encoder.is_encoded_equals(first, second),
            )
        }
        AlgorithmChoice::Nysiis => {
            let encoder = Nysiis::new();
            (
                encoder.encode(first),
                encoder.encode(second),
                encoder.is_encoded_equals(first, second),
            )
        }
    };

    println!("{}", "Phonetic Comparison".bold().underline());
    println!();
    println!("  Algorithm: {}", algorithm.to_string().cyan());
    println!("  {}: {}", first, first_code.green());
    println!("  {}: {}", second, second_code.green());
    println!();
    if equal {
        println!("{}", "Words sound alike".green().bold());
    } else {
        println!("{}", "Words sound different".yellow());
    }

    Ok(())
}

/// Load a word list, skipping blank lines and `#` comments
fn load_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open word list: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!("Failed to read line {} from {}", line_num + 1, path.display())
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            words.push(trimmed.to_string());
        }
    }

    if words.is_empty() {
        bail!("Word list is empty: {}", path.display());
    }

    Ok(words)
}
