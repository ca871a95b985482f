//! File format I/O for SeqPrep
//!
//! FASTA input is read into a single concatenated [`RawSequence`](crate::types::RawSequence);
//! chunk output is written by [`crate::chunk`].

pub mod fasta;

pub use fasta::{FastaReader, STDIN_SOURCE};
