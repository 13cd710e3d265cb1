//! CLI-specific error types
//!
//! All CLI errors are fatal: the binary prints them and exits non-zero.

use std::io;

use crate::dataset::DatasetError;
use crate::sandhi::SandhiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Sandhi(#[from] SandhiError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
