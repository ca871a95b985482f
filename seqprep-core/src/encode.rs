//! Fixed-length nucleotide encoding
//!
//! Turns a sequence of any length into an [`EncodedVector`] of exactly
//! `target_length` codes. The steps always run in this order:
//!
//! 1. uppercase every symbol
//! 2. replace the ambiguity base `N` with `A`
//! 3. map through [`SymbolMap`], unknown symbols become code 0
//! 4. right-pad with 0 or truncate to `target_length`
//!
//! Step 2 is redundant with the fallback in step 3 for `N` itself but is kept
//! as its own policy so ambiguity handling can change independently.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::types::{EncodedVector, RawSequence, SymbolMap};

/// Code written into padded positions.
pub const PAD_CODE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Number of codes in every encoded vector
    pub target_length: NonZeroUsize,
}

impl EncoderConfig {
    pub fn new(target_length: NonZeroUsize) -> Self {
        Self { target_length }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SequenceEncoder {
    config: EncoderConfig,
}

impl SequenceEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn target_length(&self) -> usize {
        self.config.target_length.get()
    }

    pub fn encode(&self, sequence: &RawSequence) -> EncodedVector {
        let target = self.target_length();
        let bases = sequence.as_bytes();

        let mut codes: Vec<u8> = bases
            .iter()
            .take(target)
            .map(|&b| SymbolMap::code(substitute_ambiguous(b.to_ascii_uppercase())))
            .collect();

        if bases.len() > target {
            log::trace!("Truncated {} trailing bases", bases.len() - target);
        } else if bases.len() < target {
            log::trace!("Padded {} positions with code {}", target - bases.len(), PAD_CODE);
            codes.resize(target, PAD_CODE);
        }

        EncodedVector::from_codes(codes)
    }
}

/// Ambiguity policy: `N` is read as `A`. Expects an uppercased base.
#[inline]
pub fn substitute_ambiguous(base: u8) -> u8 {
    if base == b'N' {
        b'A'
    } else {
        base
    }
}

/// Encode `sequence` to exactly `target_length` codes.
pub fn encode(sequence: &RawSequence, target_length: NonZeroUsize) -> EncodedVector {
    SequenceEncoder::new(EncoderConfig::new(target_length)).encode(sequence)
}
