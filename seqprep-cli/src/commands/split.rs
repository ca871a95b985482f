//! Split command implementation - fixed-length, header-free FASTA chunks

use anyhow::Result;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use seqprep_core::SequenceChunker;

use crate::config::Config;
use crate::error::CliError;

pub fn execute(
    config: &Config,
    input: PathBuf,
    out_dir: PathBuf,
    chunk_length: Option<NonZeroUsize>,
    num_files: Option<NonZeroUsize>,
    line_width: Option<NonZeroUsize>,
    prefix: Option<String>,
) -> Result<()> {
    let chunk_config = config
        .chunker
        .to_chunk_config(chunk_length, num_files, line_width, prefix);
    validate_prefix(&chunk_config.file_prefix)?;

    log::info!(
        "Splitting into chunks of {} bases ({})",
        chunk_config.chunk_length,
        match chunk_config.num_files {
            Some(n) => format!("{} files", n),
            None => "as many files as fit".to_string(),
        }
    );

    let sequence = super::read_input(&input)?;
    let chunker = SequenceChunker::new(chunk_config);
    let report = chunker.write_all(&sequence, &out_dir).map_err(CliError::from)?;

    log::info!("Output directory: {}", out_dir.display());
    println!(
        "Done: Created {} files each with sequence length {} bases.",
        report.num_files(),
        report.chunk_length
    );

    Ok(())
}

fn validate_prefix(prefix: &str) -> Result<(), CliError> {
    if prefix.is_empty() || prefix.contains(['/', '\\']) {
        return Err(CliError::validation(format!(
            "Chunk file prefix must be a non-empty file name, got: {:?}",
            prefix
        )));
    }
    Ok(())
}
