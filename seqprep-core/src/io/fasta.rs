//! FASTA sequence reader
//!
//! Reads one or more FASTA records and concatenates every body line into a
//! single [`RawSequence`]. Header lines are dropped, each line is trimmed of
//! surrounding whitespace, and nothing is inserted between lines. Body lines
//! that appear before any header belong to an implicit single record.
//!
//! The reader is lenient: empty input and header-only input both yield an
//! empty sequence, and symbol content is passed through untouched.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{Result, SeqPrepError};
use crate::types::RawSequence;

/// Source name used in errors and logs for standard input.
pub const STDIN_SOURCE: &str = "-";

/// FASTA reader producing a concatenated, header-free sequence
pub struct FastaReader;

impl FastaReader {
    /// Parse a FASTA file, decompressing it when the path ends in `.gz`
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RawSequence> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| SeqPrepError::input_unavailable(&name, e))?;

        if name.to_lowercase().ends_with(".gz") {
            Self::read_named(BufReader::new(MultiGzDecoder::new(file)), &name)
        } else {
            Self::read_named(BufReader::new(file), &name)
        }
    }

    /// Parse FASTA data from standard input
    pub fn parse_stdin() -> Result<RawSequence> {
        let stdin = std::io::stdin();
        Self::read_named(stdin.lock(), STDIN_SOURCE)
    }

    /// Parse a path, treating `-` as standard input
    pub fn parse_path_or_stdin<P: AsRef<Path>>(path: P) -> Result<RawSequence> {
        if path.as_ref().as_os_str() == STDIN_SOURCE {
            Self::parse_stdin()
        } else {
            Self::parse_file(path)
        }
    }

    /// Parse FASTA data from any buffered source
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<RawSequence> {
        Self::read_named(reader, "<reader>")
    }

    /// Parse FASTA data held in memory
    pub fn parse_str(data: &str) -> RawSequence {
        let mut sequence = Vec::with_capacity(data.len());
        let mut scan = RecordScan::default();
        for line in data.lines() {
            scan.push_line(line.as_bytes(), &mut sequence);
        }
        sequence.into()
    }

    fn read_named<R: BufRead>(mut reader: R, source_name: &str) -> Result<RawSequence> {
        let mut sequence = Vec::new();
        let mut scan = RecordScan::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| SeqPrepError::input_unavailable(source_name, e))?;
            if n == 0 {
                break;
            }
            scan.push_line(&line, &mut sequence);
        }

        log::debug!(
            "Read {} record(s), {} bases from {}",
            scan.records,
            sequence.len(),
            source_name
        );

        Ok(sequence.into())
    }
}

#[derive(Debug, Default)]
struct RecordScan {
    records: usize,
    in_record: bool,
}

impl RecordScan {
    fn push_line(&mut self, line: &[u8], sequence: &mut Vec<u8>) {
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            return;
        }
        if trimmed[0] == b'>' {
            self.records += 1;
            self.in_record = true;
            return;
        }
        if !self.in_record {
            // body before any header
            self.records += 1;
            self.in_record = true;
        }
        sequence.extend_from_slice(trimmed);
    }
}
