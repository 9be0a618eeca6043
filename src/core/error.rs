//! Error types for intronscan
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Main error type for intronscan operations
#[derive(Debug, Error)]
pub enum IntronScanError {
    /// Junction file parsing errors
    #[error("Junction parse error: {0}")]
    JunctionParse(#[from] JunctionParseError),

    /// Canonical intron file parsing errors
    #[error("Intron parse error: {0}")]
    IntronParse(#[from] IntronParseError),

    /// Best-intron selection errors
    #[error("Selection error: {0}")]
    Select(#[from] SelectError),

    /// Comparison report errors
    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),

    /// Descriptive statistics errors
    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),

    /// FASTA parsing errors
    #[error("FASTA parse error: {0}")]
    Fasta(#[from] FastaParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing aligner junction records
#[derive(Debug, Error)]
pub enum JunctionParseError {
    #[error("Empty line")]
    EmptyLine,

    #[error("Too few fields: expected at least {expected}, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("Invalid UTF-8 in field: {0}")]
    InvalidUtf8(&'static str),

    #[error("Invalid number in field {0}: {1}")]
    InvalidNumber(&'static str, String),

    /// blockSizes must hold exactly two comma-separated integers
    #[error("Malformed block sizes '{value}': expected two comma-separated integers")]
    MalformedBlockSizes { value: String },

    /// Block adjustment pushed start past end
    #[error("Block sizes invert the interval: adjusted start {start} > adjusted end {end}")]
    InvertedInterval { start: u64, end: u64 },

    /// Parse failure with file position attached
    #[error("at line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<JunctionParseError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JunctionParseError {
    /// Attach the 1-based line number of the offending record.
    pub fn at_line(self, line: usize) -> Self {
        JunctionParseError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

/// Errors raised while parsing the canonical 4-column intron format
#[derive(Debug, Error)]
pub enum IntronParseError {
    #[error("Empty line at line {line}")]
    EmptyLine { line: usize },

    #[error("Wrong field count at line {line}: expected 4, found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("Invalid number in field {field} at line {line}: {value}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Inverted interval at line {line}: start {start} > end {end}")]
    InvertedInterval { line: usize, start: u64, end: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the best-intron selection pass
#[derive(Debug, Error)]
pub enum SelectError {
    /// Input must be sorted by start ascending within each scaffold
    #[error(
        "Unsorted input on scaffold {scaffold}: start {start} after {previous} (record {record})"
    )]
    UnsortedInput {
        scaffold: String,
        start: u64,
        previous: u64,
        record: usize,
    },

    /// A scaffold reappeared after records from another scaffold
    #[error("Scaffold {scaffold} is not contiguous: reappears at record {record}")]
    ScaffoldNotContiguous { scaffold: String, record: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the comparison/statistics reporter
#[derive(Debug, Error)]
pub enum CompareError {
    /// A winner's overlap group carried zero total support
    #[error(
        "Degenerate overlap group for winner {scaffold}:{start}-{end}: overlap support sums to zero"
    )]
    DegenerateOverlap {
        scaffold: String,
        start: u64,
        end: u64,
    },

    #[error("No winning introns to report on")]
    NoWinners,
}

/// Errors raised by descriptive statistics
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("No introns in input")]
    EmptyInput,
}

/// Errors raised while parsing FASTA input
#[derive(Debug, Error)]
pub enum FastaParseError {
    #[error("Sequence data before the first '>' header at line {line}")]
    MissingHeader { line: usize },

    /// Sequence lines must be plain ASCII base symbols
    #[error("Invalid sequence character at line {line} in record '{id}'")]
    InvalidBase { id: String, line: usize },

    #[error("Record '{id}' has no sequence data")]
    EmptyRecord { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for intronscan operations
pub type Result<T> = std::result::Result<T, IntronScanError>;

/// Result type alias for selection operations
pub type SelectResult<T> = std::result::Result<T, SelectError>;

/// Result type alias for comparison operations
pub type CompareResult<T> = std::result::Result<T, CompareError>;
