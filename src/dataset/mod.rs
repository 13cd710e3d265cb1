//! Synthetic training-data generation
//!
//! Pairs come from [`PairSampler`], are combined by the Sandhi engine, wrapped
//! in one of the [`ExampleFormat`] record shapes, and can be persisted as JSON
//! Lines.
//!
//! ```
//! use panini::dataset::{generate_dataset, ExampleFormat, PairSampler};
//! use panini::SandhiEngine;
//!
//! let engine = SandhiEngine::new();
//! let sampler = PairSampler::for_engine(&engine);
//! let examples = generate_dataset(&engine, &sampler, 5, ExampleFormat::Instruction, None).unwrap();
//! assert_eq!(examples.len(), 5);
//! ```

mod format;
mod sampler;
mod writer;

pub use format::{format_pairs, ChatMessage, ExampleFormat, Role, TrainingExample, INSTRUCTION};
pub use sampler::{PairIter, PairSampler, SamplerError, DEFAULT_FIRST_WORDS, DEFAULT_SECOND_WORDS};
pub use writer::{generate_dataset, read_jsonl, save_jsonl, write_jsonl, DatasetError, JsonlWriter};
