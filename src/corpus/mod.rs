//! Word corpus
//!
//! Category files parsed into word records, plus the default corpus embedded
//! in the binary.

mod embedded;
mod loader;
mod parser;

pub use embedded::{EMBEDDED_SOURCES, EMBEDDED_SOURCES_COUNT};
pub use loader::Corpus;
pub use parser::parse_source;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or querying the corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("cannot read {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed source {origin}: {reason}")]
    MalformedRecord { origin: String, reason: String },
    #[error("category not found: {0}")]
    CategoryNotFound(String),
    #[error("no words available in category {0}")]
    CategoryEmpty(String),
}
