//! CLI argument definitions using clap
//!
//! Commands:
//! - panini-sandhi combine <word1> <word2> [--explain]
//! - panini-sandhi generate [--count N] [--format STYLE] [--output PATH] [--longest-prefix]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Sanskrit Sandhi combination and training-data generation
#[derive(Parser, Debug)]
#[command(name = "panini-sandhi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Combine two words and print the result
    Combine {
        word1: String,
        word2: String,
        /// Also print which rule produced the result
        #[arg(long)]
        explain: bool,
    },

    /// Generate a training dataset as JSON Lines
    Generate {
        /// Number of examples (overrides the configuration)
        #[arg(long)]
        count: Option<usize>,
        /// Record style: jsonl, alpaca, chatml or dict
        #[arg(long)]
        format: Option<String>,
        /// Output file; stdout when neither this nor the configuration sets one
        #[arg(long)]
        output: Option<PathBuf>,
        /// Resolve multi-segment rules by longest prefix instead of table order
        #[arg(long)]
        longest_prefix: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_combine() {
        let cli = Cli::try_parse_from(["panini-sandhi", "combine", "Deva", "Alaya", "--explain"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        match cli.command {
            Command::Combine {
                word1,
                word2,
                explain,
            } => {
                assert_eq!(word1, "Deva");
                assert_eq!(word2, "Alaya");
                assert!(explain);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "panini-sandhi",
            "generate",
            "--count",
            "20",
            "--format",
            "chatml",
            "--config",
            "custom.json",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.json"));
        match cli.command {
            Command::Generate {
                count,
                format,
                output,
                longest_prefix,
            } => {
                assert_eq!(count, Some(20));
                assert_eq!(format.as_deref(), Some("chatml"));
                assert_eq!(output, None);
                assert!(!longest_prefix);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
