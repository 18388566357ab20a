//! Forward-only VCF/BCF reader.
//!
//! Reads the header eagerly on open and then yields one `VariantRecord` per
//! record. Compression (gzip / bgzf) and the container format (VCF text or
//! BCF) are detected from the magic bytes, so the same reader serves plain,
//! compressed and binary input.

use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use noodles::{bcf, vcf, vcf::variant::RecordBuf};

use crate::error::{Result, VcfToolsError};
use crate::record::VariantRecord;

const BCF_MAGIC: &[u8] = b"BCF";

const FIXED_COLUMNS: [&str; 8] = ["#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"];

enum Decoder {
    Vcf(vcf::io::Reader<Box<dyn BufRead>>),
    Bcf(bcf::io::Reader<Box<dyn BufRead>>),
}

/// Streaming reader over the records of a VCF or BCF file.
///
/// The underlying handle is closed when the reader is dropped.
pub struct VcfReader {
    header: vcf::Header,
    decoder: Decoder,
    record: RecordBuf,
    records_read: usize,
}

impl VcfReader {
    /// Open a VCF or BCF file, or standard input when `path` is `-`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let input: Box<dyn Read> = if path == Path::new("-") {
            Box::new(io::stdin())
        } else {
            Box::new(fs::File::open(path)?)
        };
        let (reader, compression) = niffler::get_reader(input)?;
        log::debug!("Opened {} ({:?})", path.display(), compression);
        Self::new(BufReader::new(reader))
    }

    /// Wrap an already-decompressed stream and read its header.
    pub fn new<R: BufRead + 'static>(reader: R) -> Result<Self> {
        let mut inner: Box<dyn BufRead> = Box::new(reader);
        let is_bcf = inner.fill_buf()?.starts_with(BCF_MAGIC);

        let (header, decoder) = if is_bcf {
            let mut reader = bcf::io::Reader::from(inner);
            let header = reader.read_header().map_err(VcfToolsError::Header)?;
            (header, Decoder::Bcf(reader))
        } else {
            let mut reader = vcf::io::Reader::new(inner);
            let header = reader.read_header().map_err(VcfToolsError::Header)?;
            (header, Decoder::Vcf(reader))
        };

        log::debug!(
            "Read {} header: {} INFO fields, {} samples",
            if is_bcf { "BCF" } else { "VCF" },
            header.infos().len(),
            header.sample_names().len()
        );

        Ok(Self {
            header,
            decoder,
            record: RecordBuf::default(),
            records_read: 0,
        })
    }

    /// Whether the header has an `##INFO` line for `id`.
    pub fn declares_info(&self, id: &str) -> bool {
        self.header.infos().contains_key(id)
    }

    /// Names of the `#CHROM` line, with `FORMAT` and the samples when the
    /// file has any.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
        let samples = self.header.sample_names();
        if !samples.is_empty() {
            columns.push("FORMAT".to_string());
            columns.extend(samples.iter().cloned());
        }
        columns
    }

    fn read_record(&mut self) -> Result<Option<VariantRecord>> {
        let index = self.records_read + 1;
        let read = match &mut self.decoder {
            Decoder::Vcf(reader) => reader.read_record_buf(&self.header, &mut self.record),
            Decoder::Bcf(reader) => reader.read_record_buf(&self.header, &mut self.record),
        }
        .map_err(|source| VcfToolsError::Record { index, source })?;

        if read == 0 {
            return Ok(None);
        }
        self.records_read = index;

        let record = std::mem::take(&mut self.record);
        VariantRecord::new(&self.header, record)
            .map(Some)
            .map_err(|source| VcfToolsError::Record { index, source })
    }
}

impl Iterator for VcfReader {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
