//! Stats command implementation

use anyhow::Result;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use seqprep_core::SequenceStatistics;

use crate::config::Config;

pub fn execute(config: &Config, input: PathBuf, chunk_length: Option<NonZeroUsize>) -> Result<()> {
    let chunk_length = chunk_length.unwrap_or(config.chunker.chunk_length);
    let sequence = super::read_input(&input)?;
    let stats = SequenceStatistics::from_sequence(&sequence);

    println!("Length:       {}", stats.length);
    println!("A/C/G/T:      {}/{}/{}/{}", stats.a, stats.c, stats.g, stats.t);
    println!("N:            {}", stats.n);
    println!("Other:        {}", stats.other);
    println!("GC content:   {:.2}%", stats.gc_content);
    println!(
        "Full chunks:  {} of {} bases ({} bases left over)",
        stats.max_chunks(chunk_length.get()),
        chunk_length,
        stats.length % chunk_length.get()
    );

    if stats.folded() > 0 {
        log::warn!("{} positions are not A/C/G/T and will encode as A", stats.folded());
    }

    Ok(())
}
