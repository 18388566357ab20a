//! Variant set difference between two VCF files.
//!
//! Records are keyed by chromosome, position and alternate alleles; the
//! reference allele and annotations are not part of the key.

use std::fmt;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;
use crate::reader::VcfReader;
use crate::record::VariantRecord;

/// Identity of a variant across files: `<chrom>:<pos>:<alt1/alt2/...>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey(String);

impl VariantKey {
    pub fn of(record: &VariantRecord) -> Self {
        VariantKey(format!(
            "{}:{}:{}",
            record.chrom(),
            record.pos(),
            record.alts().join("/")
        ))
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record lines of one file by key, in first-seen key order.
pub type VariantMap = IndexMap<VariantKey, String>;

/// Read every record of `vcf` into a key map.
///
/// A later record with an already-seen key replaces the earlier line.
pub fn collect_variants<P: AsRef<Path>>(vcf: P) -> Result<VariantMap> {
    let vcf = vcf.as_ref();
    let mut variants = IndexMap::new();
    let mut records = 0usize;

    for record in VcfReader::from_path(vcf)? {
        let record = record?;
        records += 1;
        variants.insert(VariantKey::of(&record), record.to_string());
    }

    log::debug!(
        "{}: {} records, {} distinct variants",
        vcf.display(),
        records,
        variants.len()
    );
    Ok(variants)
}

/// Keys found in only one of the two files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantDiff {
    pub only_in_first: Vec<VariantKey>,
    pub only_in_second: Vec<VariantKey>,
}

impl VariantDiff {
    /// Compare two key maps; each side keeps its map order.
    pub fn between(first: &VariantMap, second: &VariantMap) -> Self {
        let exclusive = |from: &VariantMap, other: &VariantMap| {
            from.keys()
                .filter(|key| !other.contains_key(*key))
                .cloned()
                .collect::<Vec<_>>()
        };
        VariantDiff {
            only_in_first: exclusive(first, second),
            only_in_second: exclusive(second, first),
        }
    }
}

/// Diff two VCF files by variant key.
///
/// Without `print_records` a single count line is written; otherwise each
/// exclusive record is written prefixed by `vcf1` or `vcf2` and a tab.
pub fn snv_diff<P, Q, W>(vcf1: P, vcf2: Q, print_records: bool, out: &mut W) -> Result<VariantDiff>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    let first = collect_variants(vcf1)?;
    let second = collect_variants(vcf2)?;
    let diff = VariantDiff::between(&first, &second);

    if !print_records {
        writeln!(
            out,
            "{} only in VCF1, {} only in VCF2",
            diff.only_in_first.len(),
            diff.only_in_second.len()
        )?;
    } else {
        for (label, keys, variants) in [
            ("vcf1", &diff.only_in_first, &first),
            ("vcf2", &diff.only_in_second, &second),
        ] {
            for key in keys {
                if let Some(line) = variants.get(key) {
                    writeln!(out, "{}\t{}", label, line)?;
                }
            }
        }
    }

    log::info!(
        "{} only in first file, {} only in second file",
        diff.only_in_first.len(),
        diff.only_in_second.len()
    );
    Ok(diff)
}
