//! Core intron processing
//!
//! This module contains the intron data model, the best-intron selection
//! pass, the comparison reporter, and margin extraction.

mod compare;
mod error;
mod intron;
pub mod io;
mod margins;
mod select;

pub use compare::{compare_best_introns, ComparisonReport};
pub use error::{
    CompareError, CompareResult, FastaParseError, IntronParseError, IntronScanError,
    JunctionParseError, Result, SelectError, SelectResult, StatsError,
};
pub use intron::Intron;
pub use margins::{extend_introns, flank_windows};
pub use select::{select_best_introns, IntronRegistry, Selection};
