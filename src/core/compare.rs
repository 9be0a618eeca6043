//! Comparison of winning introns against the full intron population
//!
//! For every winner, sums the support of all introns overlapping it on its
//! scaffold and reports the winner's share of that sum, plus global
//! aggregates. Overlap lookup goes through a per-scaffold interval index.

use crate::core::error::{CompareError, CompareResult};
use crate::core::select::Selection;
use log::debug;
use rust_lapper::{Interval, Lapper};
use std::fmt;

/// Aggregated statistics over all winning introns.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Number of winning introns.
    pub winners: usize,
    /// Mean of each winner's support share within its overlap group.
    pub mean_share: f64,
    /// Total winner support over total support of all introns.
    pub global_share: f64,
    /// Mean support of a winning intron.
    pub mean_best_support: f64,
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Winning introns:                 {}", self.winners)?;
        writeln!(f, "Mean share of the best intron:   {:.4}", self.mean_share)?;
        writeln!(
            f,
            "Share of best introns in all:    {:.4}",
            self.global_share
        )?;
        write!(
            f,
            "Mean support of the best intron: {:.4}",
            self.mean_best_support
        )
    }
}

/// Compare the winners of a selection pass against every intron recorded.
///
/// Each winner's share is its own support divided by the summed support of
/// every all-registry intron intersecting it; the sum always includes the
/// winner itself, so shares lie in `(0, 1]`. A zero overlap-sum (possible
/// only with zero-support winners) is a [`CompareError::DegenerateOverlap`].
pub fn compare_best_introns(selection: &Selection) -> CompareResult<ComparisonReport> {
    let mut shares = Vec::new();
    let mut best_support_total = 0.0;
    let mut winners = 0usize;

    for (scaffold, best) in &selection.best {
        let all = selection
            .all
            .get(scaffold)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        // Index positions into the all-registry; supports are not Eq, so
        // the interval payload is the intron's index.
        let intervals: Vec<Interval<u64, usize>> = all
            .iter()
            .enumerate()
            .map(|(idx, intron)| Interval {
                start: intron.start,
                stop: intron.end,
                val: idx,
            })
            .collect();
        let lapper = Lapper::new(intervals);

        for winner in best {
            let overlap_sum: f64 = lapper
                .find(winner.start, winner.end)
                .map(|iv| all[iv.val].support)
                .sum();
            if overlap_sum <= 0.0 {
                return Err(CompareError::DegenerateOverlap {
                    scaffold: winner.scaffold.clone(),
                    start: winner.start,
                    end: winner.end,
                });
            }
            shares.push(winner.support / overlap_sum);
            best_support_total += winner.support;
            winners += 1;
        }
    }

    if winners == 0 {
        return Err(CompareError::NoWinners);
    }

    let all_support_total: f64 = selection
        .all
        .values()
        .flatten()
        .map(|intron| intron.support)
        .sum();

    let report = ComparisonReport {
        winners,
        mean_share: shares.iter().sum::<f64>() / shares.len() as f64,
        global_share: best_support_total / all_support_total,
        mean_best_support: best_support_total / winners as f64,
    };
    debug!("comparison report: {:?}", report);
    Ok(report)
}
