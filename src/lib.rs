//! intronscan - splice-junction normalization and best-intron selection
//!
//! Normalizes aligner junction calls into canonical introns, selects the
//! best-supported intron at each genomic position per scaffold, computes
//! descriptive statistics, and prepares TF-IDF k-mer features for
//! splice-class classification.
//!
//! # Example
//!
//! ```ignore
//! use intronscan::core::select_best_introns;
//! use intronscan::formats::read_introns;
//!
//! // Introns must be grouped by scaffold and sorted by start
//! let introns = read_introns("introns.bed")?;
//!
//! let mut out = Vec::new();
//! let selection = select_best_introns(introns, 5.0, &mut out)?;
//! println!("{} winners", selection.best_count());
//! ```

pub mod core;
pub mod features;
pub mod formats;

// Re-export commonly used types
pub use core::{
    compare_best_introns, extend_introns, flank_windows, select_best_introns, CompareError,
    ComparisonReport, Intron, IntronParseError, IntronRegistry, IntronScanError,
    JunctionParseError, Result, SelectError, Selection, StatsError,
};
pub use features::{featurize, kmers, splice_class, trim_sequence, SpliceClass, TrimMode};
pub use formats::{
    choose_best_introns, intron_stats, junctions_to_introns, read_fasta, read_introns,
    IntronStats, JunctionRecordView,
};
