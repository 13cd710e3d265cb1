//! JSON Lines persistence and batch dataset generation

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::format::{ExampleFormat, TrainingExample};
use super::sampler::{PairSampler, SamplerError};
use crate::sandhi::{SandhiEngine, SandhiError};

/// Dataset generation / persistence failure
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error(transparent)]
    Sandhi(#[from] SandhiError),
    #[error(transparent)]
    Sampler(#[from] SamplerError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

/// Writes one JSON object per line
///
/// Output is buffered and only flushed by [`JsonlWriter::finish`]. Dropping
/// the writer also flushes, but any error from that flush is lost.
pub struct JsonlWriter<W: Write> {
    inner: BufWriter<W>,
    written: usize,
}

impl JsonlWriter<File> {
    /// Create (or truncate) a JSONL file
    pub fn create(path: &Path) -> Result<Self, DatasetError> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
            written: 0,
        }
    }

    /// Append one record followed by a newline
    pub fn write(&mut self, example: &TrainingExample) -> Result<(), DatasetError> {
        serde_json::to_writer(&mut self.inner, example)?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the number of records written
    pub fn finish(mut self) -> Result<usize, DatasetError> {
        self.inner.flush()?;
        Ok(self.written)
    }
}

/// Write all records to `writer` as JSON Lines
pub fn write_jsonl<W: Write>(writer: W, examples: &[TrainingExample]) -> Result<usize, DatasetError> {
    let mut jsonl = JsonlWriter::new(writer);
    for example in examples {
        jsonl.write(example)?;
    }
    jsonl.finish()
}

/// Write all records to a new JSONL file
pub fn save_jsonl(path: &Path, examples: &[TrainingExample]) -> Result<usize, DatasetError> {
    write_jsonl(File::create(path)?, examples)
}

/// Read records back from a JSONL file (blank lines are skipped)
pub fn read_jsonl(path: &Path) -> Result<Vec<TrainingExample>, DatasetError> {
    let reader = BufReader::new(File::open(path)?);
    let mut examples = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let example = serde_json::from_str(&line).map_err(|source| DatasetError::Parse {
            line: i + 1,
            source,
        })?;
        examples.push(example);
    }

    Ok(examples)
}

/// Sample `count` pairs, combine and format them, and optionally persist them
///
/// Each record is written as soon as it is produced; if a pair fails, the
/// records before it stay in the file.
pub fn generate_dataset(
    engine: &SandhiEngine,
    sampler: &PairSampler,
    count: usize,
    format: ExampleFormat,
    output: Option<&Path>,
) -> Result<Vec<TrainingExample>, DatasetError> {
    let writer = output.map(JsonlWriter::create).transpose()?;
    let (examples, written) = generate_with_writer(engine, sampler, count, format, writer)?;
    log::debug!("generated {} {} examples", examples.len(), format);

    if let (Some(written), Some(path)) = (written, output) {
        log::info!("wrote {} examples to {}", written, path.display());
    }

    Ok(examples)
}

/// Generation loop; returns the examples and, with a writer, the records written
///
/// On a failing pair the writer is flushed before the pair's error is
/// returned, so a flush failure surfaces instead of the records going missing.
fn generate_with_writer<W: Write>(
    engine: &SandhiEngine,
    sampler: &PairSampler,
    count: usize,
    format: ExampleFormat,
    mut writer: Option<JsonlWriter<W>>,
) -> Result<(Vec<TrainingExample>, Option<usize>), DatasetError> {
    let mut examples = Vec::with_capacity(count);

    for (word1, word2) in sampler.sample_pairs(count) {
        let combined = match engine.combine(word1, word2) {
            Ok(combined) => combined,
            Err(e) => {
                if let Some(writer) = writer {
                    writer.finish()?;
                }
                return Err(e.into());
            }
        };
        let example = format.build(word1, word2, &combined);
        if let Some(writer) = writer.as_mut() {
            writer.write(&example)?;
        }
        examples.push(example);
    }

    let written = writer.map(JsonlWriter::finish).transpose()?;
    Ok((examples, written))
}
