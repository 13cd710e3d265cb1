//! Generator configuration (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dataset::{ExampleFormat, PairSampler, SamplerError, DEFAULT_FIRST_WORDS, DEFAULT_SECOND_WORDS};
use crate::sandhi::{MatchStrategy, SandhiEngine};

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "panini.json";

/// Configuration load/save failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Dataset generation settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of examples to generate
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,
    /// Record style: "jsonl", "alpaca", "chatml" or "dict"
    #[serde(default = "default_format")]
    pub format: String,
    /// JSONL output file; stdout when absent
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Tie-break for multi-segment rules
    #[serde(default)]
    pub match_strategy: MatchStrategy,
    #[serde(default = "default_first_words")]
    pub first_words: Vec<String>,
    #[serde(default = "default_second_words")]
    pub second_words: Vec<String>,
}

fn default_num_samples() -> usize {
    10
}

fn default_format() -> String {
    "jsonl".to_string()
}

fn default_first_words() -> Vec<String> {
    DEFAULT_FIRST_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_second_words() -> Vec<String> {
    DEFAULT_SECOND_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_samples: default_num_samples(),
            format: default_format(),
            output_path: None,
            match_strategy: MatchStrategy::default(),
            first_words: default_first_words(),
            second_words: default_second_words(),
        }
    }
}

impl GeneratorConfig {
    pub fn example_format(&self) -> ExampleFormat {
        ExampleFormat::from_style(&self.format)
    }

    /// Sampler over the engine's overrides and the configured word lists
    pub fn sampler(&self, engine: &SandhiEngine) -> Result<PairSampler, SamplerError> {
        PairSampler::with_words(engine, self.first_words.clone(), self.second_words.clone())
    }
}

/// Load configuration from `path`
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Load configuration, falling back to defaults (missing file or parse failure)
pub fn load_config_or_default(path: &Path) -> GeneratorConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            GeneratorConfig::default()
        }
        Err(e) => {
            log::warn!("using default configuration: {}", e);
            GeneratorConfig::default()
        }
    }
}

/// Save configuration as pretty-printed JSON
pub fn save_config(path: &Path, config: &GeneratorConfig) -> Result<(), ConfigError> {
    let io_err = |source: io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(io_err)?;
    Ok(())
}
