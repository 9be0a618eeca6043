//! Term-frequency / inverse-document-frequency vectorization
//!
//! Smooth idf (`ln((1+n)/(1+df)) + 1`) over raw term counts with
//! L2-normalized rows.

use rustc_hash::FxHashMap;

/// Sparse TF-IDF matrix: one row per document, entries sorted by term
/// index, rows L2-normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfMatrix {
    /// Term index to term, sorted lexicographically.
    pub vocabulary: Vec<String>,
    /// Per-document `(term index, weight)` pairs.
    pub rows: Vec<Vec<(usize, f64)>>,
}

impl TfidfMatrix {
    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Vectorize tokenized documents. Documents with no tokens produce empty
/// rows; terms are indexed in sorted order for deterministic output.
pub fn vectorize(documents: &[Vec<&str>]) -> TfidfMatrix {
    // Document frequencies over the whole corpus.
    let mut df: FxHashMap<&str, usize> = FxHashMap::default();
    for doc in documents {
        let mut seen: Vec<&str> = doc.clone();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let mut vocabulary: Vec<String> = df.keys().map(|t| t.to_string()).collect();
    vocabulary.sort_unstable();
    let index: FxHashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    let n = documents.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| ((1.0 + n) / (1.0 + df[term.as_str()] as f64)).ln() + 1.0)
        .collect();

    let rows = documents
        .iter()
        .map(|doc| {
            let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
            for term in doc {
                *counts.entry(index[term]).or_insert(0) += 1;
            }
            let mut row: Vec<(usize, f64)> = counts
                .into_iter()
                .map(|(term_idx, count)| (term_idx, count as f64 * idf[term_idx]))
                .collect();
            row.sort_unstable_by_key(|(term_idx, _)| *term_idx);

            let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in &mut row {
                    *w /= norm;
                }
            }
            row
        })
        .collect();

    TfidfMatrix { vocabulary, rows }
}
