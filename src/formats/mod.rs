//! File format adapters
//!
//! Aligner junction records, the canonical intron format, and FASTA input
//! for the feature pipeline.

pub mod fasta;
pub mod introns;
pub mod junctions;

pub use fasta::{read_fasta, FastaRecord};
pub use introns::{
    choose_best_introns, emit_sorted, intron_stats, parse_intron_line, read_introns,
    write_introns, IntronStats,
};
pub use junctions::{junctions_to_introns, JunctionRecordView};
