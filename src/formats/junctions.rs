//! Aligner junction format
//!
//! Parses RegTools-style junction BED records with zero-copy field access
//! and converts them into canonical introns by applying the flanking
//! block-size offsets.

use crate::core::io::{open_input, LineIterator};
use crate::core::{Intron, IntronRegistry, JunctionParseError};
use log::info;
use memchr::memchr;
use std::io::Write;
use std::path::Path;

/// Minimum fields in a junction record (BED12).
const MIN_FIELDS: usize = 12;

/// Zero-copy junction record view
/// Only parses coordinate fields immediately, other fields are kept as byte slices
pub struct JunctionRecordView<'a> {
    /// Original line bytes
    line: &'a [u8],
    /// Scaffold name
    pub scaffold: &'a str,
    /// Block start (outer edge of the left anchor)
    pub block_start: u64,
    /// Block end (outer edge of the right anchor)
    pub block_end: u64,
    /// Field boundaries (start, end) for lazy access
    field_bounds: Vec<(usize, usize)>,
}

impl<'a> JunctionRecordView<'a> {
    /// Parse a junction line with minimal allocation.
    /// Only scaffold, block_start and block_end are parsed immediately.
    pub fn parse(line: &'a [u8]) -> Result<Self, JunctionParseError> {
        if line.is_empty() {
            return Err(JunctionParseError::EmptyLine);
        }

        // Find field boundaries using memchr for tab characters
        let mut field_bounds = Vec::with_capacity(MIN_FIELDS);
        let mut start_pos = 0;
        let mut pos = 0;

        while pos < line.len() {
            if let Some(tab_pos) = memchr(b'\t', &line[pos..]) {
                let end_pos = pos + tab_pos;
                field_bounds.push((start_pos, end_pos));
                start_pos = end_pos + 1;
                pos = start_pos;
            } else {
                // Last field
                field_bounds.push((start_pos, line.len()));
                break;
            }
        }

        if field_bounds.len() < MIN_FIELDS {
            return Err(JunctionParseError::TooFewFields {
                expected: MIN_FIELDS,
                found: field_bounds.len(),
            });
        }

        let scaffold = std::str::from_utf8(&line[field_bounds[0].0..field_bounds[0].1])
            .map_err(|_| JunctionParseError::InvalidUtf8("scaffold"))?;

        let start_str = std::str::from_utf8(&line[field_bounds[1].0..field_bounds[1].1])
            .map_err(|_| JunctionParseError::InvalidUtf8("blockStart"))?;
        let block_start: u64 = start_str
            .parse()
            .map_err(|_| JunctionParseError::InvalidNumber("blockStart", start_str.to_string()))?;

        let end_str = std::str::from_utf8(&line[field_bounds[2].0..field_bounds[2].1])
            .map_err(|_| JunctionParseError::InvalidUtf8("blockEnd"))?;
        let block_end: u64 = end_str
            .parse()
            .map_err(|_| JunctionParseError::InvalidNumber("blockEnd", end_str.to_string()))?;

        Ok(Self {
            line,
            scaffold,
            block_start,
            block_end,
            field_bounds,
        })
    }

    /// Get the number of fields
    pub fn field_count(&self) -> usize {
        self.field_bounds.len()
    }

    /// Get field as string slice (lazy access)
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.field_bounds
            .get(index)
            .and_then(|(start, end)| std::str::from_utf8(&self.line[*start..*end]).ok())
    }

    /// Get name field (field 3)
    pub fn name(&self) -> Option<&'a str> {
        self.field(3)
    }

    /// Parse the score field (field 4) as the junction's support.
    pub fn support(&self) -> Result<f64, JunctionParseError> {
        let raw = self
            .field(4)
            .ok_or(JunctionParseError::InvalidUtf8("score"))?;
        raw.parse()
            .map_err(|_| JunctionParseError::InvalidNumber("score", raw.to_string()))
    }

    /// Get strand field (field 5)
    pub fn strand(&self) -> Option<&'a str> {
        self.field(5)
    }

    /// Parse the second-to-last field as the two flanking block sizes.
    /// Anything other than exactly two comma-separated integers (an
    /// optional trailing comma is tolerated) is a data-format error.
    pub fn block_sizes(&self) -> Result<(u64, u64), JunctionParseError> {
        let raw = self
            .field(self.field_count() - 2)
            .ok_or(JunctionParseError::InvalidUtf8("blockSizes"))?;
        let malformed = || JunctionParseError::MalformedBlockSizes {
            value: raw.to_string(),
        };

        let mut parts = raw.split(',');
        let left: u64 = parts
            .next()
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
            .ok_or_else(malformed)?;
        let right: u64 = parts
            .next()
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
            .ok_or_else(malformed)?;
        if let Some(extra) = parts.next() {
            if !extra.is_empty() || parts.next().is_some() {
                return Err(malformed());
            }
        }
        Ok((left, right))
    }

    /// Recover the true intron coordinates by trimming the flanking blocks:
    /// `start = blockStart + leftSize`, `end = blockEnd - rightSize`.
    pub fn to_intron(&self) -> Result<Intron, JunctionParseError> {
        let (left, right) = self.block_sizes()?;
        let start = self.block_start + left;
        let end = self
            .block_end
            .checked_sub(right)
            .ok_or(JunctionParseError::InvertedInterval {
                start,
                end: 0,
            })?;
        let support = self.support()?;
        Intron::new(self.scaffold, start, end, support)
            .ok_or(JunctionParseError::InvertedInterval { start, end })
    }
}

/// Convert an aligner junction file into the canonical sorted intron format.
///
/// Records are bucketed by scaffold, sorted by start within each scaffold,
/// and emitted as `scaffold\tstart\tend\tsupport`, scaffold groups in
/// lexicographic order. Duplicate coordinates are preserved. Comment and
/// track lines are skipped. Returns the grouped, sorted registry.
pub fn junctions_to_introns<P: AsRef<Path>, W: Write>(
    input: P,
    writer: &mut W,
) -> Result<IntronRegistry, JunctionParseError> {
    let reader = open_input(input.as_ref())?;
    let mut lines = LineIterator::new(reader);
    let mut introns = Vec::new();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line() {
        let line = line?;
        line_no += 1;
        if line.is_empty() || line.starts_with('#') || line.starts_with("track") {
            continue;
        }
        let view = JunctionRecordView::parse(line.as_bytes()).map_err(|e| e.at_line(line_no))?;
        introns.push(view.to_intron().map_err(|e| e.at_line(line_no))?);
    }

    let converted = introns.len();
    let registry = crate::formats::introns::emit_sorted(introns, writer)?;
    info!(
        "converted {} junctions on {} scaffolds",
        converted,
        registry.len()
    );
    Ok(registry)
}
