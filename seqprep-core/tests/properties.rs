use proptest::prelude::*;
use seqprep_core::{encode, ChunkConfig, RawSequence, SeqPrepError, SequenceChunker, SymbolMap};
use std::num::NonZeroUsize;

fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

proptest! {
    #[test]
    fn encoded_length_is_target(seq in "[ACGTNacgtnRYK\\-]{0,300}", target in 1usize..200) {
        let encoded = encode(&RawSequence::from(seq.as_str()), nz(target));
        prop_assert_eq!(encoded.len(), target);
        prop_assert!(encoded.as_slice().iter().all(|&c| (c as usize) < SymbolMap::ALPHABET_SIZE));
    }

    #[test]
    fn non_canonical_symbols_encode_like_a(c in any::<u8>()) {
        prop_assume!(!SymbolMap::is_canonical(c));
        let folded = encode(&RawSequence::from(vec![c]), nz(1));
        let a = encode(&RawSequence::from("A"), nz(1));
        prop_assert_eq!(folded, a);
    }

    #[test]
    fn reencoding_is_idempotent(seq in "[ACGTNacgtn]{1,200}") {
        let sequence = RawSequence::from(seq.as_str());
        let target = nz(sequence.len());
        let first = encode(&sequence, target);
        prop_assert_eq!(encode(&first.decode(), target), first);
    }

    #[test]
    fn chunks_tile_the_source_prefix(
        seq in "[ACGTN]{0,400}",
        chunk_length in 1usize..50,
        num_files in 1usize..10,
    ) {
        let sequence = RawSequence::from(seq.as_str());
        let chunker = SequenceChunker::new(ChunkConfig::new(nz(chunk_length), Some(nz(num_files))));
        let required = chunk_length * num_files;

        match chunker.chunk(&sequence) {
            Ok(chunks) => {
                prop_assert!(sequence.len() >= required);
                prop_assert_eq!(chunks.len(), num_files);
                let joined: Vec<u8> = chunks.iter().flat_map(|c| c.bases.iter().copied()).collect();
                prop_assert_eq!(&joined[..], &sequence.as_bytes()[..required]);
                for (i, c) in chunks.iter().enumerate() {
                    prop_assert_eq!(c.index, i + 1);
                    prop_assert_eq!(c.len(), chunk_length);
                }
            }
            Err(SeqPrepError::Length { observed, required: r, .. }) => {
                prop_assert!(sequence.len() < required);
                prop_assert_eq!(observed, sequence.len());
                prop_assert_eq!(r, required);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
