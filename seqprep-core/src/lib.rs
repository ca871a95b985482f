//! SeqPrep Core Library
//!
//! FASTA reading, fixed-length encoding for classifier input, and fixed-length
//! chunking of long sequences into header-free FASTA files.

pub mod types;
pub mod error;
pub mod io;
pub mod encode;
pub mod chunk;
pub mod classify;
pub mod stats;

// Re-export commonly used types and functions
pub use types::{Chunk, EncodedVector, ModelInput, RawSequence, SymbolMap};
pub use error::{Result, SeqPrepError};
pub use io::FastaReader;
pub use encode::{encode, EncoderConfig, SequenceEncoder};
pub use chunk::{ChunkConfig, ChunkReport, SequenceChunker, FASTA_LINE_WIDTH};
pub use classify::{classify, Classifier, Label, LogisticModel, Prediction, DEFAULT_THRESHOLD};
pub use stats::SequenceStatistics;

/// Version information for the SeqPrep core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
