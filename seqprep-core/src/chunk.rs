//! Fixed-length sequence chunking
//!
//! Splits one long sequence into `num_files` non-overlapping chunks of
//! `chunk_length` bases and writes each one as a header-free FASTA body,
//! wrapped at a fixed line width, to `<prefix>_<i>.fasta` (1-based `i`).
//!
//! Validation happens before any output: if the source is shorter than
//! `chunk_length * num_files` nothing is created, not even the output
//! directory. Bases past the last full chunk are discarded, never emitted as a
//! short final chunk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqPrepError};
use crate::types::{Chunk, RawSequence};

/// Conventional FASTA body line width.
pub const FASTA_LINE_WIDTH: NonZeroUsize = match NonZeroUsize::new(60) {
    Some(width) => width,
    None => unreachable!(),
};

pub const DEFAULT_FILE_PREFIX: &str = "chunk";

fn default_line_width() -> NonZeroUsize { FASTA_LINE_WIDTH }
fn default_file_prefix() -> String { DEFAULT_FILE_PREFIX.to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Bases per chunk
    pub chunk_length: NonZeroUsize,

    /// Number of chunks to emit; derived from the source length when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files: Option<NonZeroUsize>,

    /// Bases per line in the written files
    #[serde(default = "default_line_width")]
    pub line_width: NonZeroUsize,

    /// Output file name prefix
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl ChunkConfig {
    pub fn new(chunk_length: NonZeroUsize, num_files: Option<NonZeroUsize>) -> Self {
        Self {
            chunk_length,
            num_files,
            line_width: FASTA_LINE_WIDTH,
            file_prefix: default_file_prefix(),
        }
    }

    pub fn with_line_width(mut self, line_width: NonZeroUsize) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_file_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }
}

/// Files produced by [`SequenceChunker::write_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    /// Written paths in ordinal order
    pub files: Vec<PathBuf>,
    pub chunk_length: usize,
    /// Trailing bases that did not fit into a chunk
    pub residue: usize,
}

impl ChunkReport {
    pub fn num_files(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone)]
pub struct SequenceChunker {
    config: ChunkConfig,
}

impl SequenceChunker {
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Number of chunks that will be requested for a source of `source_len` bases.
    pub fn resolve_count(&self, source_len: usize) -> usize {
        match self.config.num_files {
            Some(n) => n.get(),
            None => source_len / self.config.chunk_length.get(),
        }
    }

    /// Split `sequence` into chunks, failing if it is too short.
    pub fn chunk<'a>(&self, sequence: &'a RawSequence) -> Result<Vec<Chunk<'a>>> {
        let chunk_length = self.config.chunk_length.get();
        let num_files = self.resolve_count(sequence.len());
        let required = chunk_length.saturating_mul(num_files);

        if sequence.len() < required {
            return Err(SeqPrepError::Length {
                observed: sequence.len(),
                required,
                num_files,
            });
        }

        Ok(sequence.as_bytes()[..required]
            .chunks_exact(chunk_length)
            .enumerate()
            .map(|(i, bases)| Chunk { index: i + 1, bases })
            .collect())
    }

    /// Validate, then write every chunk into `out_dir`.
    pub fn write_all<P: AsRef<Path>>(&self, sequence: &RawSequence, out_dir: P) -> Result<ChunkReport> {
        let out_dir = out_dir.as_ref();
        let chunks = self.chunk(sequence)?;

        std::fs::create_dir_all(out_dir).map_err(|e| SeqPrepError::output(out_dir, e))?;

        let files = chunks
            .par_iter()
            .map(|chunk| -> Result<PathBuf> {
                let path = out_dir.join(chunk.file_name(&self.config.file_prefix));
                write_chunk_file(&path, chunk, self.config.line_width)?;
                Ok(path)
            })
            .collect::<Result<Vec<PathBuf>>>()?;

        let chunk_length = self.config.chunk_length.get();
        let residue = sequence.len() - chunk_length * files.len();
        log::info!(
            "Wrote {} chunk file(s) of {} bases to {} ({} trailing bases discarded)",
            files.len(),
            chunk_length,
            out_dir.display(),
            residue
        );

        Ok(ChunkReport {
            files,
            chunk_length,
            residue,
        })
    }
}

/// Write a chunk body wrapped at `line_width`, each line newline-terminated.
pub fn write_chunk<W: Write>(writer: &mut W, chunk: &Chunk<'_>, line_width: NonZeroUsize) -> std::io::Result<()> {
    for line in chunk.bases.chunks(line_width.get()) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

fn write_chunk_file(path: &Path, chunk: &Chunk<'_>, line_width: NonZeroUsize) -> Result<()> {
    let file = File::create(path).map_err(|e| SeqPrepError::output(path, e))?;
    let mut writer = BufWriter::new(file);
    write_chunk(&mut writer, chunk, line_width)
        .and_then(|_| writer.flush())
        .map_err(|e| SeqPrepError::output(path, e))?;
    log::trace!("Wrote chunk {} to {}", chunk.index, path.display());
    Ok(())
}
