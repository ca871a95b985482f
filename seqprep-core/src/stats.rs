//! Composition statistics for a raw sequence

use serde::Serialize;

use crate::types::RawSequence;

/// Symbol counts for a [`RawSequence`], case-insensitive
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequenceStatistics {
    pub length: usize,
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub n: usize,
    /// Anything outside A, C, G, T, N
    pub other: usize,
    /// Percent G+C over canonical bases only
    pub gc_content: f64,
}

impl SequenceStatistics {
    pub fn from_sequence(sequence: &RawSequence) -> Self {
        let mut stats = Self {
            length: sequence.len(),
            ..Self::default()
        };

        for &base in sequence.as_bytes() {
            match base.to_ascii_uppercase() {
                b'A' => stats.a += 1,
                b'C' => stats.c += 1,
                b'G' => stats.g += 1,
                b'T' => stats.t += 1,
                b'N' => stats.n += 1,
                _ => stats.other += 1,
            }
        }

        let canonical = stats.canonical();
        if canonical > 0 {
            stats.gc_content = (stats.g + stats.c) as f64 / canonical as f64 * 100.0;
        }
        stats
    }

    pub fn canonical(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Positions the encoder will map through the fallback rule.
    pub fn folded(&self) -> usize {
        self.n + self.other
    }

    /// How many full chunks of `chunk_length` fit in the sequence.
    pub fn max_chunks(&self, chunk_length: usize) -> usize {
        if chunk_length == 0 {
            return 0;
        }
        self.length / chunk_length
    }
}
