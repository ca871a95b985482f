use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Header-free, ungapped nucleotide string produced by concatenating FASTA body lines.
///
/// Case and symbols are kept exactly as read; alphabet normalization happens in
/// the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawSequence {
    data: Vec<u8>,
}

impl RawSequence {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for RawSequence {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for RawSequence {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl From<&str> for RawSequence {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

impl From<String> for RawSequence {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl AsRef<[u8]> for RawSequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Nucleotide to integer code mapping: A=0, C=1, G=2, T=3.
///
/// Lookup uppercases first. Any other symbol falls back to the code for `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMap;

impl SymbolMap {
    pub const ALPHABET_SIZE: usize = 4;
    pub const FALLBACK_CODE: u8 = 0;

    const SYMBOLS: [u8; Self::ALPHABET_SIZE] = [b'A', b'C', b'G', b'T'];

    #[inline]
    pub const fn code(base: u8) -> u8 {
        match base.to_ascii_uppercase() {
            b'A' => 0,
            b'C' => 1,
            b'G' => 2,
            b'T' => 3,
            _ => Self::FALLBACK_CODE,
        }
    }

    /// Inverse of [`SymbolMap::code`]; returns `None` for codes outside the alphabet.
    #[inline]
    pub fn symbol(code: u8) -> Option<u8> {
        Self::SYMBOLS.get(code as usize).copied()
    }

    /// Whether `base` is one of A, C, G, T (case-insensitive).
    #[inline]
    pub const fn is_canonical(base: u8) -> bool {
        matches!(base.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')
    }
}

/// Fixed-length vector of symbol codes ready for the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedVector {
    codes: Vec<u8>,
}

impl EncodedVector {
    pub(crate) fn from_codes(codes: Vec<u8>) -> Self {
        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.codes
    }

    /// Map codes back through the inverse symbol map.
    pub fn decode(&self) -> RawSequence {
        self.codes
            .iter()
            .map(|&c| SymbolMap::symbol(c).unwrap_or(b'A'))
            .collect::<Vec<u8>>()
            .into()
    }

    /// Reshape to a single-sample batch: `[1, len]`.
    pub fn to_model_input(&self) -> ModelInput {
        ModelInput {
            shape: [1, self.codes.len()],
            features: self.codes.iter().map(|&c| c as f32).collect(),
        }
    }
}

/// One sample of classifier features with a leading batch dimension of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    pub shape: [usize; 2],
    pub features: Vec<f32>,
}

impl ModelInput {
    pub fn batch_size(&self) -> usize {
        self.shape[0]
    }

    pub fn feature_count(&self) -> usize {
        self.shape[1]
    }
}

/// A fixed-length, non-overlapping slice of a source sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// 1-based ordinal
    pub index: usize,
    pub bases: &'a [u8],
}

impl Chunk<'_> {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}_{}.fasta", prefix, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_map_codes() {
        assert_eq!(SymbolMap::code(b'A'), 0);
        assert_eq!(SymbolMap::code(b'c'), 1);
        assert_eq!(SymbolMap::code(b'G'), 2);
        assert_eq!(SymbolMap::code(b't'), 3);
        assert_eq!(SymbolMap::code(b'N'), 0);
        assert_eq!(SymbolMap::code(b'-'), 0);
    }

    #[test]
    fn test_symbol_map_inverse() {
        for &base in b"ACGT" {
            assert_eq!(SymbolMap::symbol(SymbolMap::code(base)), Some(base));
        }
        assert_eq!(SymbolMap::symbol(4), None);
    }

    #[test]
    fn test_model_input_has_batch_dimension() {
        let encoded = EncodedVector::from_codes(vec![0, 1, 2, 3, 0]);
        let input = encoded.to_model_input();
        assert_eq!(input.shape, [1, 5]);
        assert_eq!(input.batch_size(), 1);
        assert_eq!(input.features, vec![0.0, 1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_chunk_file_name() {
        let chunk = Chunk { index: 7, bases: b"ACGT" };
        assert_eq!(chunk.file_name("chunk"), "chunk_7.fasta");
        assert_eq!(chunk.len(), 4);
    }

    #[test]
    fn test_raw_sequence_conversions() {
        let seq = RawSequence::from("acgN");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.as_bytes(), b"acgN");
        assert_eq!(seq.to_string_lossy(), "acgN");
        assert!(RawSequence::default().is_empty());
    }
}
