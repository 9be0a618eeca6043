//! Canonical intron format
//!
//! Tab-delimited `scaffold\tstart\tend\tsupport`, one record per line,
//! grouped by scaffold and ascending by start within a group. This module
//! reads and writes that format and hosts the file-level operations built
//! on it: best-intron selection and descriptive statistics.

use crate::core::io::{create_output, finish, open_input, LineIterator};
use crate::core::{
    select_best_introns, Intron, IntronParseError, IntronRegistry, IntronScanError, Selection,
    StatsError,
};
use log::info;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Parse one canonical intron line. `line_no` is 1-based, for error context.
pub fn parse_intron_line(line: &str, line_no: usize) -> Result<Intron, IntronParseError> {
    if line.is_empty() {
        return Err(IntronParseError::EmptyLine { line: line_no });
    }
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 4 {
        return Err(IntronParseError::WrongFieldCount {
            line: line_no,
            found: fields.len(),
        });
    }
    let start: u64 = fields[1].parse().map_err(|_| IntronParseError::InvalidNumber {
        line: line_no,
        field: "start",
        value: fields[1].to_string(),
    })?;
    let end: u64 = fields[2].parse().map_err(|_| IntronParseError::InvalidNumber {
        line: line_no,
        field: "end",
        value: fields[2].to_string(),
    })?;
    let support: f64 = fields[3].parse().map_err(|_| IntronParseError::InvalidNumber {
        line: line_no,
        field: "support",
        value: fields[3].to_string(),
    })?;
    Intron::new(fields[0], start, end, support).ok_or(IntronParseError::InvertedInterval {
        line: line_no,
        start,
        end,
    })
}

/// Read a canonical intron file, preserving file order.
pub fn read_introns<P: AsRef<Path>>(path: P) -> Result<Vec<Intron>, IntronParseError> {
    let reader = open_input(path.as_ref())?;
    let mut lines = LineIterator::new(reader);
    let mut introns = Vec::new();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line() {
        let line = line?;
        line_no += 1;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        introns.push(parse_intron_line(line, line_no)?);
    }
    Ok(introns)
}

/// Group introns by scaffold, sort each group by start ascending and write
/// the canonical format, scaffold groups in lexicographic order. Duplicates
/// are preserved. Returns the grouped, sorted registry.
pub fn emit_sorted<I, W>(introns: I, writer: &mut W) -> std::io::Result<IntronRegistry>
where
    I: IntoIterator<Item = Intron>,
    W: Write,
{
    let mut registry = IntronRegistry::new();
    for intron in introns {
        registry
            .entry(intron.scaffold.clone())
            .or_default()
            .push(intron);
    }
    for group in registry.values_mut() {
        group.sort_by_key(|intron| intron.start);
        for intron in group.iter() {
            writeln!(writer, "{}", intron)?;
        }
    }
    Ok(registry)
}

/// Write introns in the canonical format.
pub fn write_introns<'a, I, W>(introns: I, writer: &mut W) -> std::io::Result<usize>
where
    I: IntoIterator<Item = &'a Intron>,
    W: Write,
{
    let mut written = 0;
    for intron in introns {
        writeln!(writer, "{}", intron)?;
        written += 1;
    }
    Ok(written)
}

/// Run the best-intron selection pass over a canonical intron file,
/// writing winners to `output`. The input must already be grouped by
/// scaffold and sorted by start (as `junctions_to_introns` emits it).
pub fn choose_best_introns<P: AsRef<Path>>(
    input: P,
    output: P,
    cutoff: f64,
) -> Result<Selection, IntronScanError> {
    let introns = read_introns(input.as_ref())?;
    let mut writer = create_output(output.as_ref())?;
    let selection = select_best_introns(introns, cutoff, &mut writer)?;
    finish(writer)?;
    info!(
        "selected {} best introns out of {}",
        selection.best_count(),
        selection.all_count()
    );
    Ok(selection)
}

/// Descriptive statistics over a set of introns.
#[derive(Debug, Clone, PartialEq)]
pub struct IntronStats {
    pub count: usize,
    pub mean_support: f64,
    pub median_support: f64,
}

impl fmt::Display for IntronStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of introns: {}", self.count)?;
        writeln!(f, "Mean support:      {:.4}", self.mean_support)?;
        write!(f, "Median support:    {:.4}", self.median_support)
    }
}

/// Count, mean and median support. Empty input is an error, not NaN.
pub fn intron_stats(introns: &[Intron]) -> Result<IntronStats, StatsError> {
    if introns.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let mut supports: Vec<f64> = introns.iter().map(|i| i.support).collect();
    supports.sort_by(|a, b| a.total_cmp(b));
    let mid = supports.len() / 2;
    let median = if supports.len() % 2 == 0 {
        (supports[mid - 1] + supports[mid]) / 2.0
    } else {
        supports[mid]
    };
    Ok(IntronStats {
        count: introns.len(),
        mean_support: supports.iter().sum::<f64>() / supports.len() as f64,
        median_support: median,
    })
}
