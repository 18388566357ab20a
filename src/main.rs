//! Command line entry point for the VCF rank tools.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use vcf_rank_tools::{
    Comparison, InfoFilterOptions, Normalizer, RankScoreOptions, filter_info, print_rankscore,
    snv_diff,
};

fn parse_comparison(mode: &str) -> std::result::Result<Comparison, String> {
    Comparison::parse(mode).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Inspect and filter ranked VCF files.
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print rank scores, or the records they belong to
    Rankscore {
        /// VCF or BCF file (plain or gzipped), `-` for stdin
        vcf: PathBuf,

        /// One of equal, greater, less, lessorequal, greaterorequal; all
        /// records are kept when omitted
        #[arg(short, long, value_parser = parse_comparison)]
        comparison: Option<Comparison>,

        /// Value the rank score is compared against
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        threshold: f64,

        /// Print whole records
        #[arg(short, long)]
        full: bool,

        /// Rank model config used to label RankResult subscores
        #[arg(short, long)]
        rank_model: Option<PathBuf>,

        /// Comma-separated 0-based columns to print before the scores
        #[arg(long)]
        columns: Option<String>,

        /// Stop after more than this many records were printed
        #[arg(long)]
        head: Option<usize>,
    },

    /// Print records whose INFO field matches a value
    FilterInfo {
        /// VCF or BCF file (plain or gzipped), `-` for stdin
        vcf: PathBuf,

        /// INFO key to filter on
        #[arg(short, long)]
        field: String,

        /// Value to compare against
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// One of equal, greater, less
        #[arg(short, long, value_parser = parse_comparison)]
        comparison: Comparison,

        /// Normalizer applied to the raw INFO value, e.g. 'split("|", 0).lower'
        #[arg(short, long, default_value = "")]
        normalize: String,

        /// Print the first record's raw value and the missing count instead
        /// of records
        #[arg(short, long)]
        debug: bool,
    },

    /// Compare two VCF files by chromosome, position and alternate alleles
    Diff {
        vcf1: PathBuf,
        vcf2: PathBuf,

        /// Print the records found in only one file
        #[arg(short, long)]
        print_records: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Rankscore {
            vcf,
            comparison,
            threshold,
            full,
            rank_model,
            columns,
            head,
        } => {
            let opts = RankScoreOptions {
                comparison,
                threshold,
                print_full: full,
                rank_model,
                columns,
                head: head.unwrap_or(usize::MAX),
            };
            print_rankscore(&vcf, &opts, &mut out)
                .with_context(|| format!("Failed to report rank scores of {}", vcf.display()))?;
        }
        Commands::FilterInfo {
            vcf,
            field,
            value,
            comparison,
            normalize,
            debug,
        } => {
            let normalizer = Normalizer::parse(&normalize)?;
            let opts = InfoFilterOptions {
                field,
                value,
                comparison,
                debug,
            };
            filter_info(&vcf, &opts, |raw| normalizer.apply(raw), &mut out)
                .with_context(|| format!("Failed to filter {}", vcf.display()))?;
        }
        Commands::Diff {
            vcf1,
            vcf2,
            print_records,
        } => {
            snv_diff(&vcf1, &vcf2, print_records, &mut out).with_context(|| {
                format!("Failed to diff {} and {}", vcf1.display(), vcf2.display())
            })?;
        }
    }

    Ok(())
}
