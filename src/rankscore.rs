//! Rank score reporting.
//!
//! Streams a VCF, pulls the `RankScore` (and with a rank model the
//! `RankResult` subscores) out of each record, keeps the records whose score
//! passes the comparison and prints them whole, as a column subset, or as
//! bare scores.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::compare::{Comparison, passes};
use crate::error::{Result, VcfToolsError};
use crate::rank_model::RankModel;
use crate::reader::VcfReader;
use crate::record::VariantRecord;
use crate::value::{Value, format_float};

/// INFO key holding `<family>:<score>`.
pub const RANK_SCORE_KEY: &str = "RankScore";
/// INFO key holding `|`-separated per-category subscores.
pub const RANK_RESULT_KEY: &str = "RankResult";

/// Options for [`print_rankscore`].
#[derive(Debug, Clone)]
pub struct RankScoreOptions {
    /// Comparison against `threshold`; `None` keeps every record.
    pub comparison: Option<Comparison>,
    pub threshold: f64,
    /// Print whole records instead of scores.
    pub print_full: bool,
    pub rank_model: Option<PathBuf>,
    /// Comma-separated column indices to print before the scores.
    pub columns: Option<String>,
    /// Stop once more than this many records were printed.
    pub head: usize,
}

impl Default for RankScoreOptions {
    fn default() -> Self {
        Self {
            comparison: None,
            threshold: 0.0,
            print_full: false,
            rank_model: None,
            columns: None,
            head: usize::MAX,
        }
    }
}

/// What a printed entry looks like.
#[derive(Debug, Clone, Copy)]
enum OutputMode<'a> {
    Full,
    Columns(&'a [usize]),
    Scores,
}

/// Parse a comma-separated list of column indices.
pub fn parse_columns(columns: &str) -> Result<Vec<usize>> {
    columns
        .split(',')
        .map(|col| {
            col.trim()
                .parse::<usize>()
                .map_err(|_| VcfToolsError::InvalidColumns(columns.to_string()))
        })
        .collect()
}

/// Parse a `RankScore` value of the form `<prefix>:<score>`.
pub fn parse_rank_score(raw: &str) -> Result<f64> {
    raw.split(':')
        .nth(1)
        .and_then(|score| score.trim().parse::<f64>().ok())
        .ok_or_else(|| VcfToolsError::RankScoreParseError(raw.to_string()))
}

/// Parse a `RankResult` value of the form `<int>|<int>|...`.
pub fn parse_rank_subscores(raw: &str) -> Result<Vec<i64>> {
    raw.split('|')
        .map(|score| {
            score
                .trim()
                .parse::<i64>()
                .map_err(|_| VcfToolsError::RankResultParseError(raw.to_string()))
        })
        .collect()
}

fn required_info(record: &VariantRecord, key: &str) -> Result<String> {
    record
        .info_first(key)
        .ok_or_else(|| VcfToolsError::MissingField {
            field: key.to_string(),
            chrom: record.chrom().to_string(),
            pos: record.pos(),
        })
}

fn select<'a>(fields: &[&'a str], columns: &[usize]) -> Result<Vec<&'a str>> {
    columns
        .iter()
        .map(|&index| {
            fields
                .get(index)
                .copied()
                .ok_or(VcfToolsError::ColumnOutOfRange {
                    index,
                    length: fields.len(),
                })
        })
        .collect()
}

fn write_header<W: Write>(
    out: &mut W,
    header_fields: &[String],
    mode: OutputMode<'_>,
    rank_model: Option<&RankModel>,
) -> Result<()> {
    let categories = rank_model.map(RankModel::categories).unwrap_or_default();
    let line = match mode {
        OutputMode::Full => header_fields.join("\t"),
        OutputMode::Columns(columns) => {
            let fields: Vec<&str> = header_fields.iter().map(String::as_str).collect();
            let mut selected = select(&fields, columns)?;
            selected.push(RANK_SCORE_KEY);
            selected.extend(categories.iter().map(String::as_str));
            selected.join("\t")
        }
        OutputMode::Scores if rank_model.is_some() => {
            let mut selected = vec![RANK_SCORE_KEY];
            selected.extend(categories.iter().map(String::as_str));
            selected.join("\t")
        }
        OutputMode::Scores => return Ok(()),
    };
    writeln!(out, "{}", line)?;
    Ok(())
}

fn write_entry<W: Write>(
    out: &mut W,
    record: &VariantRecord,
    score: f64,
    subscores: Option<&[i64]>,
    mode: OutputMode<'_>,
) -> Result<()> {
    match mode {
        OutputMode::Full => writeln!(out, "{}", record)?,
        OutputMode::Columns(columns) => {
            let mut line: Vec<String> = select(&record.fields(), columns)?
                .into_iter()
                .map(str::to_string)
                .collect();
            line.push(format_float(score));
            if let Some(subscores) = subscores {
                line.extend(subscores.iter().map(i64::to_string));
            }
            writeln!(out, "{}", line.join("\t"))?;
        }
        OutputMode::Scores => match subscores {
            Some(subscores) => {
                let mut list = vec![Value::Number(score)];
                list.extend(subscores.iter().map(|s| Value::String(s.to_string())));
                writeln!(out, "{}", Value::Array(list))?;
            }
            None => writeln!(out, "{}", format_float(score))?,
        },
    }
    Ok(())
}

/// Print the records of `vcf` whose rank score passes the comparison.
///
/// Returns the number of records printed. At most `head + 1` records are
/// printed; scanning stops as soon as that many have matched.
///
/// # Errors
///
/// Fails on an invalid column list or rank model before opening the VCF, and
/// on the first record with a missing or malformed `RankScore` (or
/// `RankResult` when a rank model is given).
pub fn print_rankscore<P: AsRef<Path>, W: Write>(
    vcf: P,
    opts: &RankScoreOptions,
    out: &mut W,
) -> Result<usize> {
    let columns = opts.columns.as_deref().map(parse_columns).transpose()?;
    let rank_model = opts
        .rank_model
        .as_ref()
        .map(RankModel::from_path)
        .transpose()?;

    let mode = if opts.print_full {
        OutputMode::Full
    } else if let Some(columns) = &columns {
        OutputMode::Columns(columns)
    } else {
        OutputMode::Scores
    };

    let reader = VcfReader::from_path(vcf.as_ref())?;
    let header_fields = reader.columns();

    let mut is_first_line = true;
    let mut seen = 0usize;
    let mut printed = 0usize;

    for record in reader {
        let record = record?;
        seen += 1;

        if is_first_line {
            write_header(out, &header_fields, mode, rank_model.as_ref())?;
            is_first_line = false;
        }

        let score = parse_rank_score(&required_info(&record, RANK_SCORE_KEY)?)?;

        let subscores = match &rank_model {
            Some(model) => {
                let subscores = parse_rank_subscores(&required_info(&record, RANK_RESULT_KEY)?)?;
                if subscores.len() != model.categories().len() {
                    log::debug!(
                        "{}:{} has {} subscores for {} categories",
                        record.chrom(),
                        record.pos(),
                        subscores.len(),
                        model.categories().len()
                    );
                }
                Some(subscores)
            }
            None => None,
        };

        if passes(opts.comparison, score, opts.threshold) {
            write_entry(out, &record, score, subscores.as_deref(), mode)?;
            printed += 1;
        }

        if printed > opts.head {
            log::debug!("Reached the limit of {} records", opts.head);
            break;
        }
    }

    log::info!("Printed {} of {} records scanned", printed, seen);
    Ok(printed)
}
