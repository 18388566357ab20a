//! # VCF Rank Tools
//!
//! Small filters over VCF (Variant Call Format) and BCF files annotated by a
//! variant ranking tool. Decoding is done by `noodles`.
//!
//! ## Features
//!
//! - Report `RankScore` values, optionally with `RankResult` subscores
//!   labelled by a rank model, filtered by a comparison against a threshold
//! - Filter records on a single INFO field, after rewriting its value with a
//!   normalizer expression
//! - Diff two VCF files by chromosome, position and alternate alleles
//!
//! ## Example
//!
//! ```rust
//! use vcf_rank_tools::{Comparison, info_matches, parse_rank_score};
//!
//! let score = parse_rank_score("family_1:14").unwrap();
//! assert!(Comparison::GreaterOrEqual.holds(score, 10.0));
//!
//! // `greater` in the INFO filter includes the threshold
//! assert!(info_matches("2", "2", Comparison::Greater));
//! ```
//!
//! ## Comparison Modes
//! - `equal` Equal
//! - `greater` Greater than (INFO filter: greater than or equal)
//! - `less` Less than (INFO filter: less than or equal)
//! - `lessorequal` Less than or equal (INFO filter: never matches)
//! - `greaterorequal` Greater than or equal (INFO filter: never matches)
//!
//! ## Normalizer Steps
//! - `trim`, `lower`, `upper`
//! - `split("<sep>", <index>)` - keep one segment
//! - `replace("<from>", "<to>")`
//! - `strip_prefix("<prefix>")`, `strip_suffix("<suffix>")`

pub mod compare;
pub mod diff;
pub mod error;
pub mod info_filter;
pub mod normalize;
pub mod rank_model;
pub mod rankscore;
pub mod reader;
pub mod record;
pub mod value;

pub use compare::Comparison;
pub use diff::{VariantDiff, VariantKey, collect_variants, snv_diff};
pub use error::{Result, VcfToolsError};
pub use info_filter::{InfoFilterOptions, InfoFilterSummary, filter_info, info_matches};
pub use normalize::Normalizer;
pub use rank_model::RankModel;
pub use rankscore::{RankScoreOptions, parse_rank_score, parse_rank_subscores, print_rankscore};
pub use reader::VcfReader;
pub use record::VariantRecord;
pub use value::Value;
