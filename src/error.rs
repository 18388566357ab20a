//! Error types for the VCF rank tools.

use thiserror::Error;

/// Errors that can occur while reading, filtering or diffing VCF files.
#[derive(Error, Debug)]
pub enum VcfToolsError {
    /// A comparison mode string outside the supported set.
    #[error("Invalid comparison mode: {0} (expected equal, greater, less, lessorequal or greaterorequal)")]
    InvalidComparison(String),

    /// The column list could not be parsed into indices.
    #[error("Invalid column list: {0}")]
    InvalidColumns(String),

    /// A selected column does not exist in the header or record.
    #[error("Column {index} out of range (line has {length} fields)")]
    ColumnOutOfRange { index: usize, length: usize },

    /// The RankScore INFO value is malformed.
    #[error("Could not parse RankScore value {0:?}")]
    RankScoreParseError(String),

    /// The RankResult INFO value is malformed.
    #[error("Could not parse RankResult value {0:?}")]
    RankResultParseError(String),

    /// A required INFO field is absent from a record.
    #[error("Missing INFO field {field} at {chrom}:{pos}")]
    MissingField {
        field: String,
        chrom: String,
        pos: usize,
    },

    /// The VCF or BCF header was rejected by the decoder.
    #[error("Could not read header: {0}")]
    Header(#[source] std::io::Error),

    /// A record was rejected by the decoder.
    #[error("Could not read record {index}: {source}")]
    Record {
        /// 1-based position of the record in the file.
        index: usize,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read categories from a rank model file.
    #[error("Rank model parse error: {0}")]
    RankModelParseError(String),

    /// Failed to parse a normalizer expression.
    #[error("Normalizer parse error: {0}")]
    NormalizerParseError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The input could not be opened or its compression detected.
    #[error("Could not open input: {0}")]
    Open(#[from] niffler::Error),
}

/// Result type alias for VCF tool operations.
pub type Result<T> = std::result::Result<T, VcfToolsError>;
