//! Owned view of one decoded VCF/BCF record.
//!
//! Wraps the decoder's `RecordBuf` together with the record rendered as a VCF
//! line, so full-record output looks the same for text and binary input.

use std::fmt;
use std::io;

use noodles::vcf::{
    self,
    variant::{
        RecordBuf,
        io::Write as _,
        record_buf::info::field::{Value, value::Array},
    },
};

/// A decoded variant record.
///
/// The record owns its data, so it stays valid after the reader moves on.
#[derive(Debug, Clone)]
pub struct VariantRecord {
    line: String,
    record: RecordBuf,
}

fn missing_or<T: ToString>(values: &[Option<T>]) -> Vec<String> {
    values
        .iter()
        .map(|value| match value {
            Some(v) => v.to_string(),
            None => ".".to_string(),
        })
        .collect()
}

/// Render a typed INFO value back to its raw strings.
fn raw_values(value: &Value) -> Vec<String> {
    match value {
        Value::Integer(n) => vec![n.to_string()],
        Value::Float(n) => vec![n.to_string()],
        Value::Flag => Vec::new(),
        Value::Character(c) => vec![c.to_string()],
        Value::String(s) => vec![s.clone()],
        Value::Array(Array::Integer(values)) => missing_or(values),
        Value::Array(Array::Float(values)) => missing_or(values),
        Value::Array(Array::Character(values)) => missing_or(values),
        Value::Array(Array::String(values)) => missing_or(values),
    }
}

impl VariantRecord {
    /// Take ownership of a decoded record and render its VCF line.
    pub fn new(header: &vcf::Header, record: RecordBuf) -> io::Result<Self> {
        let mut writer = vcf::io::Writer::new(Vec::new());
        writer.write_variant_record(header, &record)?;

        let mut line = String::from_utf8(writer.into_inner())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }

        Ok(Self { line, record })
    }

    /// Chromosome (CHROM column).
    pub fn chrom(&self) -> &str {
        self.record.reference_sequence_name()
    }

    /// 1-based position (POS column); 0 when the position is missing.
    pub fn pos(&self) -> usize {
        self.record
            .variant_start()
            .map(|position| position.get())
            .unwrap_or_default()
    }

    /// Alternate alleles; empty when ALT is `.`.
    pub fn alts(&self) -> &[String] {
        self.record.alternate_bases().as_ref()
    }

    /// Raw values of an INFO entry.
    ///
    /// Returns `None` when the key is absent and an empty list for a flag or
    /// an entry without a value.
    pub fn info(&self, key: &str) -> Option<Vec<String>> {
        self.record
            .info()
            .get(key)
            .map(|value| value.map(raw_values).unwrap_or_default())
    }

    /// First raw value of an INFO entry, if there is one.
    pub fn info_first(&self, key: &str) -> Option<String> {
        self.info(key)?.into_iter().next()
    }

    /// The tab-separated fields of the VCF line.
    pub fn fields(&self) -> Vec<&str> {
        self.line.split('\t').collect()
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
