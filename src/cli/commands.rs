//! CLI command implementations
//!
//! Commands are thin: they resolve configuration, build an engine, and hand
//! the work to the library.

use std::io::Write;

use crate::config::GeneratorConfig;
use crate::dataset::{generate_dataset, write_jsonl, DatasetError};
use crate::sandhi::{MatchStrategy, SandhiEngine};

use super::args::Command;
use super::errors::CliResult;

/// Dispatch a parsed command, writing results to `out`
pub fn run_command<W: Write>(command: Command, config: GeneratorConfig, out: &mut W) -> CliResult<()> {
    match command {
        Command::Combine {
            word1,
            word2,
            explain,
        } => combine(&config, &word1, &word2, explain, out),
        Command::Generate {
            count,
            format,
            output,
            longest_prefix,
        } => {
            let mut config = config;
            if let Some(count) = count {
                config.num_samples = count;
            }
            if let Some(format) = format {
                config.format = format;
            }
            if output.is_some() {
                config.output_path = output;
            }
            if longest_prefix {
                config.match_strategy = MatchStrategy::LongestPrefix;
            }
            generate(&config, out)
        }
    }
}

/// Print the combination of two words
pub fn combine<W: Write>(
    config: &GeneratorConfig,
    word1: &str,
    word2: &str,
    explain: bool,
    out: &mut W,
) -> CliResult<()> {
    let engine = SandhiEngine::from_config(config);
    let combination = engine.combine_traced(word1, word2)?;
    if explain {
        writeln!(out, "{}\t{}", combination.combined, combination.derivation)?;
    } else {
        writeln!(out, "{}", combination.combined)?;
    }
    Ok(())
}

/// Generate a dataset to the configured file, or to `out` as JSONL
pub fn generate<W: Write>(config: &GeneratorConfig, out: &mut W) -> CliResult<()> {
    let engine = SandhiEngine::from_config(config);
    let sampler = config.sampler(&engine).map_err(DatasetError::from)?;
    let output = config.output_path.as_deref();
    let examples = generate_dataset(
        &engine,
        &sampler,
        config.num_samples,
        config.example_format(),
        output,
    )?;

    match output {
        Some(path) => writeln!(out, "{} examples written to {}", examples.len(), path.display())?,
        None => {
            write_jsonl(&mut *out, &examples)?;
        }
    }
    Ok(())
}
