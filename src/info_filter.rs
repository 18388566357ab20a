//! INFO field filtering.
//!
//! Prints the records whose first value for one INFO key, after
//! normalization, matches a comparison value.

use std::io::Write;
use std::path::Path;

use crate::compare::Comparison;
use crate::error::Result;
use crate::reader::VcfReader;
use crate::value::Value;

/// Options for [`filter_info`].
#[derive(Debug, Clone)]
pub struct InfoFilterOptions {
    /// INFO key to read.
    pub field: String,
    /// Value to compare against; parsed as a float for numeric modes.
    pub value: String,
    pub comparison: Comparison,
    /// Print diagnostics instead of records.
    pub debug: bool,
}

/// Counts gathered while filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoFilterSummary {
    pub records: usize,
    pub matched: usize,
    /// Records without a value for the field.
    pub missing: usize,
}

fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Whether a normalized value matches.
///
/// `greater` and `less` include the threshold itself. `greaterorequal` and
/// `lessorequal` never match here. Values that do not parse as numbers never
/// match the numeric modes.
pub fn info_matches(value: &str, target: &str, comparison: Comparison) -> bool {
    match comparison {
        Comparison::Equal => value == target,
        Comparison::Greater | Comparison::Less => match (parse_float(value), parse_float(target)) {
            (Some(value), Some(target)) => {
                if comparison == Comparison::Greater {
                    value >= target
                } else {
                    value <= target
                }
            }
            _ => false,
        },
        Comparison::GreaterOrEqual | Comparison::LessOrEqual => false,
    }
}

/// Print the records of `vcf` whose normalized INFO value matches.
///
/// `normalize` is applied to the first raw value of the field before
/// comparing. In debug mode no records are printed; instead the raw field
/// value of the first record and the final count of records missing the
/// field are written.
pub fn filter_info<P, W, F>(
    vcf: P,
    opts: &InfoFilterOptions,
    normalize: F,
    out: &mut W,
) -> Result<InfoFilterSummary>
where
    P: AsRef<Path>,
    W: Write,
    F: Fn(&str) -> String,
{
    let reader = VcfReader::from_path(vcf.as_ref())?;
    if !reader.declares_info(&opts.field) {
        log::warn!("INFO field {} is not declared in the header", opts.field);
    }

    let mut summary = InfoFilterSummary::default();

    for record in reader {
        let record = record?;
        summary.records += 1;

        let raw = record.info(&opts.field);
        if opts.debug && summary.records == 1 {
            writeln!(out, "{}", Value::from(raw.clone()))?;
        }

        let Some(first) = raw.and_then(|values| values.into_iter().next()) else {
            summary.missing += 1;
            continue;
        };

        let value = normalize(&first);
        if info_matches(&value, &opts.value, opts.comparison) {
            summary.matched += 1;
            if !opts.debug {
                writeln!(out, "{}", record)?;
            }
        } else {
            log::trace!("{}:{} skipped ({:?})", record.chrom(), record.pos(), value);
        }
    }

    if opts.debug {
        writeln!(out, "Number missing: {}", summary.missing)?;
    }

    log::info!(
        "{} of {} records matched, {} missing {}",
        summary.matched,
        summary.records,
        summary.missing,
        opts.field
    );
    Ok(summary)
}
