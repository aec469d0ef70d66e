//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "metaphone")]
#[command(about = "Phonetic encoding with Double Metaphone, Refined Soundex, and NYSIIS")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode words into phonetic codes
    Encode {
        /// Words to encode
        words: Vec<String>,

        /// Word list file (one word per line)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Phonetic algorithm
        #[arg(short, long, value_enum, default_value = "double-metaphone")]
        algorithm: AlgorithmChoice,

        /// Code length for Double Metaphone
        #[arg(short = 'n', long, default_value = "4")]
        code_size: usize,

        /// Keep the classic NYSIIS ending rules instead of trimming
        /// the trailing vowel run
        #[arg(long)]
        no_trim: bool,
    },

    /// Check whether two words sound alike
    Compare {
        /// First word
        first: String,

        /// Second word
        second: String,

        /// Phonetic algorithm
        #[arg(short, long, value_enum, default_value = "double-metaphone")]
        algorithm: AlgorithmChoice,

        /// Compare alternate readings (Double Metaphone only)
        #[arg(long)]
        alternate: bool,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Double Metaphone primary and secondary codes
    DoubleMetaphone,
    /// Refined Soundex
    RefinedSoundex,
    /// NYSIIS
    Nysiis,
}

impl std::fmt::Display for AlgorithmChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DoubleMetaphone => write!(f, "double-metaphone"),
            Self::RefinedSoundex => write!(f, "refined-soundex"),
            Self::Nysiis => write!(f, "nysiis"),
        }
    }
}
