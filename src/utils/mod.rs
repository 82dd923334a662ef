//! Shared utilities: memory size parsing and topology validation.

pub mod size;
pub mod validation;

pub use size::{parse_memory_size, SizeParseError};
pub use validation::validate_topology;
