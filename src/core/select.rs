//! Best-intron selection
//!
//! Single forward pass over introns sorted by scaffold then start. Tracks
//! the currently-open overlapping run and keeps the single highest-support
//! intron as the run's representative; the representative is flushed when a
//! disjoint record or a new scaffold arrives.

use crate::core::error::{SelectError, SelectResult};
use crate::core::intron::Intron;
use log::debug;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::io::Write;

/// Scaffold-keyed registry of introns, ascending by start within a scaffold.
pub type IntronRegistry = BTreeMap<String, Vec<Intron>>;

/// Result of a selection pass: every input intron plus the chosen winners.
#[derive(Debug, Default)]
pub struct Selection {
    /// Every record seen, regardless of cutoff.
    pub all: IntronRegistry,
    /// One winning intron per disjoint overlapping run per scaffold.
    pub best: IntronRegistry,
}

impl Selection {
    pub fn all_count(&self) -> usize {
        self.all.values().map(Vec::len).sum()
    }

    pub fn best_count(&self) -> usize {
        self.best.values().map(Vec::len).sum()
    }
}

/// Validates the sorted-by-scaffold-then-start precondition while scanning.
struct OrderGuard {
    scaffold: Option<String>,
    last_start: u64,
    seen: FxHashSet<String>,
}

impl OrderGuard {
    fn new() -> Self {
        Self {
            scaffold: None,
            last_start: 0,
            seen: FxHashSet::default(),
        }
    }

    fn check(&mut self, intron: &Intron, record: usize) -> SelectResult<()> {
        match &self.scaffold {
            Some(current) if *current == intron.scaffold => {
                if intron.start < self.last_start {
                    return Err(SelectError::UnsortedInput {
                        scaffold: intron.scaffold.clone(),
                        start: intron.start,
                        previous: self.last_start,
                        record,
                    });
                }
            }
            _ => {
                if !self.seen.insert(intron.scaffold.clone()) {
                    return Err(SelectError::ScaffoldNotContiguous {
                        scaffold: intron.scaffold.clone(),
                        record,
                    });
                }
                self.scaffold = Some(intron.scaffold.clone());
            }
        }
        self.last_start = intron.start;
        Ok(())
    }
}

/// Choose the best-supported intron at each genomic position per scaffold.
///
/// Preconditions (validated, violation is an error): records arrive grouped
/// by scaffold and sorted by start ascending within each scaffold.
///
/// Every record lands in `Selection::all`. Records with support below
/// `cutoff` cannot open, extend, or win a run, but do not close one either.
/// Each winner is written to `writer` in the canonical tab-delimited format
/// as its run closes. Empty input produces empty registries and no output.
///
/// Run extension is strictly pairwise: an incoming record is compared
/// against the current representative's end, never against a merged extent,
/// so chains of three or more staggered introns can split into several runs.
pub fn select_best_introns<I, W>(records: I, cutoff: f64, writer: &mut W) -> SelectResult<Selection>
where
    I: IntoIterator<Item = Intron>,
    W: Write,
{
    let mut selection = Selection::default();
    let mut guard = OrderGuard::new();
    let mut open_run: Option<Intron> = None;

    for (idx, intron) in records.into_iter().enumerate() {
        guard.check(&intron, idx + 1)?;

        selection
            .all
            .entry(intron.scaffold.clone())
            .or_default()
            .push(intron.clone());

        if intron.support < cutoff {
            continue;
        }

        open_run = match open_run.take() {
            None => Some(intron),
            Some(run) if run.scaffold == intron.scaffold && intron.start < run.end => {
                // Same position: keep the single highest-support intron's
                // coordinates, never merge extents.
                if intron.support > run.support {
                    Some(intron)
                } else {
                    Some(run)
                }
            }
            Some(run) => {
                flush_run(run, writer, &mut selection.best)?;
                Some(intron)
            }
        };
    }

    if let Some(run) = open_run {
        flush_run(run, writer, &mut selection.best)?;
    }

    debug!(
        "selection pass done: {} introns in, {} winners",
        selection.all_count(),
        selection.best_count()
    );
    Ok(selection)
}

fn flush_run<W: Write>(run: Intron, writer: &mut W, best: &mut IntronRegistry) -> SelectResult<()> {
    writeln!(writer, "{}", run)?;
    best.entry(run.scaffold.clone()).or_default().push(run);
    Ok(())
}
