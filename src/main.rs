//! intronscan CLI entry point
//!
//! Splice-junction normalization, best-intron selection and splice-class
//! feature extraction over flat tab-delimited files.

use clap::{Parser, Subcommand, ValueEnum};
use intronscan::core::io::{create_output, finish};
use intronscan::core::{compare_best_introns, extend_introns, flank_windows, CompareError};
use intronscan::features::{featurize, SpliceClass, TrimMode};
use intronscan::formats::{
    choose_best_introns, intron_stats, junctions_to_introns, read_fasta, read_introns,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "intronscan")]
#[command(about = "Splice-junction normalization and best-intron selection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Trimming mode for the feature pipeline (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum TrimModeArg {
    /// Leave sequences intact
    #[default]
    #[value(name = "keep")]
    Keep,
    /// Trim conventional junctions only
    #[value(name = "conventional")]
    Conventional,
    /// Trim both junction classes
    #[value(name = "all")]
    All,
}

impl From<TrimModeArg> for TrimMode {
    fn from(arg: TrimModeArg) -> Self {
        match arg {
            TrimModeArg::Keep => TrimMode::Keep,
            TrimModeArg::Conventional => TrimMode::Conventional,
            TrimModeArg::All => TrimMode::All,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert aligner junctions into the canonical sorted intron format
    Convert {
        /// Input junction file (RegTools-style BED12, .gz supported)
        input: PathBuf,
        /// Output intron file
        output: PathBuf,
    },
    /// Select the best-supported intron at each position per scaffold
    Best {
        /// Input intron file, grouped by scaffold and sorted by start
        input: PathBuf,
        /// Output file with one winning intron per disjoint run
        output: PathBuf,
        /// Minimum support for an intron to be eligible as best
        #[arg(short = 'c', long, default_value = "0")]
        cutoff: f64,
    },
    /// Print descriptive statistics of an intron file
    Stats {
        /// Input intron file
        input: PathBuf,
    },
    /// Widen introns by a fixed margin on both sides
    Margins {
        /// Input intron file
        input: PathBuf,
        /// Output coordinate file
        output: PathBuf,
        /// Bases added on each side
        #[arg(short = 'm', long)]
        margin: u64,
    },
    /// Extract flanking windows around each intron boundary
    Flanks {
        /// Input intron file
        input: PathBuf,
        /// Output file for start-side windows
        start_output: PathBuf,
        /// Output file for end-side windows
        end_output: PathBuf,
        /// Bases reaching outward from each boundary
        #[arg(long)]
        outer: u64,
        /// Bases reaching inward from each boundary
        #[arg(long)]
        inner: u64,
    },
    /// Extract labelled TF-IDF k-mer features from intron sequences
    Features {
        /// Input FASTA file with intron sequences (3-base exon margins)
        input: PathBuf,
        /// Output file for per-sequence labels
        #[arg(long)]
        labels_out: PathBuf,
        /// Output file for the sparse TF-IDF matrix
        #[arg(long)]
        matrix_out: PathBuf,
        /// K-mer length
        #[arg(short = 'k', long, default_value = "6")]
        kmer: usize,
        /// Motif-adjacent trimming mode
        #[arg(long, default_value = "keep")]
        trim: TrimModeArg,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Convert { input, output } => {
            eprintln!("Converting junctions: {:?} -> {:?}", input, output);
            let mut writer = create_output(&output)?;
            let registry = junctions_to_introns(&input, &mut writer)?;
            finish(writer)?;

            let introns: Vec<_> = registry.into_values().flatten().collect();
            match intron_stats(&introns) {
                Ok(stats) => eprintln!("\n{}", stats),
                Err(e) => eprintln!("\n{}", e),
            }
            eprintln!("Time elapsed:      {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Best {
            input,
            output,
            cutoff,
        } => {
            eprintln!(
                "Selecting best introns: {:?} -> {:?} (cutoff={})",
                input, output, cutoff
            );
            let selection = choose_best_introns(&input, &output, cutoff)?;
            eprintln!("\nIntrons read:   {}", selection.all_count());
            eprintln!("Winners:        {}", selection.best_count());

            match compare_best_introns(&selection) {
                Ok(report) => eprintln!("\n{}", report),
                // Nothing cleared the cutoff; the selection output is still
                // valid, there is just nothing to compare.
                Err(CompareError::NoWinners) => {
                    eprintln!("\nNo winners above the cutoff; skipping comparison report")
                }
                Err(e) => return Err(e.into()),
            }
            eprintln!("Time elapsed:   {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Stats { input } => {
            let introns = read_introns(&input)?;
            let stats = intron_stats(&introns)?;
            println!("{}", stats);
        }

        Commands::Margins {
            input,
            output,
            margin,
        } => {
            let introns = read_introns(&input)?;
            let mut writer = create_output(&output)?;
            let written = extend_introns(&introns, margin, &mut writer)?;
            finish(writer)?;
            eprintln!("Wrote {} widened introns (margin={})", written, margin);
            eprintln!("Time elapsed: {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Flanks {
            input,
            start_output,
            end_output,
            outer,
            inner,
        } => {
            let introns = read_introns(&input)?;
            let mut start_writer = create_output(&start_output)?;
            let mut end_writer = create_output(&end_output)?;
            let written = flank_windows(&introns, outer, inner, &mut start_writer, &mut end_writer)?;
            finish(start_writer)?;
            finish(end_writer)?;
            eprintln!(
                "Wrote {} flank window pairs (outer={}, inner={})",
                written, outer, inner
            );
            eprintln!("Time elapsed: {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Features {
            input,
            labels_out,
            matrix_out,
            kmer,
            trim,
        } => {
            eprintln!("Extracting features: {:?} (k={}, trim={:?})", input, kmer, trim);
            let records = read_fasta(&input)?;
            let (labels, matrix) = featurize(&records, kmer, trim.into());

            let mut labels_writer = create_output(&labels_out)?;
            for (record, label) in records.iter().zip(&labels) {
                let tag = match label {
                    SpliceClass::Conventional => "conventional",
                    SpliceClass::NonConventional => "non_conventional",
                };
                writeln!(labels_writer, "{}\t{}", record.id, tag)?;
            }
            finish(labels_writer)?;

            // Sparse triplet output: row, term index, weight
            let mut matrix_writer = create_output(&matrix_out)?;
            for (row_idx, row) in matrix.rows.iter().enumerate() {
                for (term_idx, weight) in row {
                    writeln!(matrix_writer, "{}\t{}\t{:.6}", row_idx, term_idx, weight)?;
                }
            }
            finish(matrix_writer)?;

            let conventional = labels
                .iter()
                .filter(|l| **l == SpliceClass::Conventional)
                .count();
            eprintln!("\nSequences:       {}", records.len());
            eprintln!("Conventional:    {}", conventional);
            eprintln!("Vocabulary size: {}", matrix.n_terms());
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }
    }

    Ok(())
}
