//! Splice-class feature extraction
//!
//! Labels intron sequences by their terminal splice motifs, optionally
//! trims motif-adjacent bases, tokenizes into overlapping k-mers and
//! vectorizes with TF-IDF weights. The downstream classifier consumes the
//! labelled matrix; training it is outside this crate.
//!
//! Sequences are indexed by byte; callers must supply ASCII base strings,
//! which is what [`crate::formats::read_fasta`] guarantees.

mod tfidf;

pub use tfidf::{vectorize, TfidfMatrix};

use crate::formats::FastaRecord;

/// Offsets of the donor/acceptor dinucleotides inside an extracted intron
/// sequence, which carries 3 exonic bases on each side.
const ANCHOR_OFFSET: usize = 3;

/// Splice-junction class by terminal dinucleotides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceClass {
    /// `GT...AG` (or its reverse complement `CT...AC`).
    Conventional,
    NonConventional,
}

/// How to trim motif-adjacent bases before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimMode {
    /// Leave sequences intact.
    #[default]
    Keep,
    /// Trim recognized conventional junctions to strip the anchors and the
    /// canonical motif itself.
    Conventional,
    /// Additionally trim non-conventional junctions by a wider window.
    All,
}

/// Classify a sequence by its splice anchors: conventional iff the bases
/// just inside the 3-base exonic margin read `GT`/`AG` or `CT`/`AC`.
/// Sequences too short to carry both anchors are non-conventional.
pub fn splice_class(sequence: &str) -> SpliceClass {
    let b = sequence.as_bytes();
    if b.len() < 2 * (ANCHOR_OFFSET + 2) {
        return SpliceClass::NonConventional;
    }
    let left = &b[ANCHOR_OFFSET..ANCHOR_OFFSET + 2];
    let right = &b[b.len() - ANCHOR_OFFSET - 2..b.len() - ANCHOR_OFFSET];
    if (left == b"GT" && right == b"AG") || (left == b"CT" && right == b"AC") {
        SpliceClass::Conventional
    } else {
        SpliceClass::NonConventional
    }
}

/// Trim a sequence according to `mode`. Sequences too short for the
/// requested window are left intact.
pub fn trim_sequence(sequence: &str, mode: TrimMode) -> &str {
    fn cut(seq: &str, left: usize, right: usize) -> &str {
        if seq.len() >= left + right {
            &seq[left..seq.len() - right]
        } else {
            seq
        }
    }
    match (mode, splice_class(sequence)) {
        (TrimMode::Keep, _) => sequence,
        (_, SpliceClass::Conventional) => cut(sequence, 5, 5),
        (TrimMode::Conventional, SpliceClass::NonConventional) => sequence,
        (TrimMode::All, SpliceClass::NonConventional) => cut(sequence, 8, 9),
    }
}

/// Overlapping k-mer windows. Sequences shorter than k yield no tokens.
pub fn kmers(sequence: &str, k: usize) -> Vec<&str> {
    if k == 0 || sequence.len() < k {
        return Vec::new();
    }
    (0..=sequence.len() - k)
        .map(|i| &sequence[i..i + k])
        .collect()
}

/// Label every record by its raw sequence, then trim, tokenize and
/// vectorize. Returns one label and one matrix row per input record.
pub fn featurize(
    records: &[FastaRecord],
    k: usize,
    mode: TrimMode,
) -> (Vec<SpliceClass>, TfidfMatrix) {
    let labels: Vec<SpliceClass> = records.iter().map(|r| splice_class(&r.sequence)).collect();
    let trimmed: Vec<&str> = records
        .iter()
        .map(|r| trim_sequence(&r.sequence, mode))
        .collect();
    let documents: Vec<Vec<&str>> = trimmed.iter().map(|s| kmers(s, k)).collect();
    (labels, vectorize(&documents))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3-base margins around a GT...AG intron
    const CONVENTIONAL: &str = "ACGGTAAGTTTTCAGACG";
    const REVERSE: &str = "ACGCTAAGTTTTAACACG";
    const OTHER: &str = "ACGATAAGTTTTCATACG";

    #[test]
    fn test_splice_class_motifs() {
        assert_eq!(splice_class(CONVENTIONAL), SpliceClass::Conventional);
        assert_eq!(splice_class(REVERSE), SpliceClass::Conventional);
        assert_eq!(splice_class(OTHER), SpliceClass::NonConventional);
    }

    #[test]
    fn test_splice_class_short_sequence() {
        assert_eq!(splice_class("ACGGTAAG"), SpliceClass::NonConventional);
    }

    #[test]
    fn test_trim_keep() {
        assert_eq!(trim_sequence(CONVENTIONAL, TrimMode::Keep), CONVENTIONAL);
    }

    #[test]
    fn test_trim_conventional_strips_motif() {
        let trimmed = trim_sequence(CONVENTIONAL, TrimMode::Conventional);
        assert_eq!(trimmed, &CONVENTIONAL[5..CONVENTIONAL.len() - 5]);
        // Non-conventional sequences are left whole in this mode.
        assert_eq!(trim_sequence(OTHER, TrimMode::Conventional), OTHER);
    }

    #[test]
    fn test_trim_all_trims_both_classes() {
        assert_eq!(
            trim_sequence(CONVENTIONAL, TrimMode::All),
            &CONVENTIONAL[5..CONVENTIONAL.len() - 5]
        );
        assert_eq!(trim_sequence(OTHER, TrimMode::All), &OTHER[8..OTHER.len() - 9]);
    }

    #[test]
    fn test_kmers_window_count() {
        assert_eq!(kmers("ACGTA", 3), vec!["ACG", "CGT", "GTA"]);
        assert_eq!(kmers("ACGTA", 5), vec!["ACGTA"]);
        assert!(kmers("AC", 3).is_empty());
        assert!(kmers("ACGT", 0).is_empty());
    }

    #[test]
    fn test_featurize_shapes() {
        let records = vec![
            crate::formats::FastaRecord {
                id: "a".into(),
                sequence: CONVENTIONAL.into(),
            },
            crate::formats::FastaRecord {
                id: "b".into(),
                sequence: OTHER.into(),
            },
        ];
        let (labels, matrix) = featurize(&records, 4, TrimMode::Keep);
        assert_eq!(labels.len(), 2);
        assert_eq!(matrix.rows.len(), 2);
        assert!(!matrix.vocabulary.is_empty());
    }
}
