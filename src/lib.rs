pub mod cli;
pub mod config;
pub mod dataset;
pub mod sandhi;

pub use dataset::{ExampleFormat, PairSampler, TrainingExample};
pub use sandhi::{SandhiEngine, SandhiError};
