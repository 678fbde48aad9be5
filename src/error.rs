use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading a verification table and
/// producing a ranking. Verification data is either complete and
/// trustworthy or the run is abandoned: every variant aborts the pipeline
/// and names the offending identifier, there is no partial output.
#[derive(Debug, Error)]
pub enum ScamError {
    /// The requested variable code is not in the catalog.
    #[error("unknown variable code: {0}")]
    UnknownVariable(String),

    /// A statistics file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line did not parse, or the table's shape is inconsistent.
    #[error("malformed table {path}: {reason}")]
    MalformedTable { path: PathBuf, reason: String },

    /// No experiment name occurred exactly twice in the input list.
    #[error("no reference experiment found (no name given exactly twice)")]
    NoReferenceFound,

    /// More than one experiment name occurred exactly twice.
    #[error("ambiguous reference: both {0} and {1} occur twice")]
    AmbiguousReference(String, String),

    /// An experiment's series length differs from the reference's.
    #[error(
        "series length mismatch for experiment {experiment}: \
         {actual} lead times, reference has {expected}"
    )]
    SeriesLengthMismatch {
        experiment: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, ScamError>;
