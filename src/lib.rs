//! Aggregation and ranking engine for SCANTEC-style forecast-verification
//! tables.
//!
//! Pipeline:
//! ```text
//!   raw experiment names ──► reference::resolve ──► ReferenceSplit
//!   split + time window  ──► data::files         ──► ExperimentFileSets
//!   file sets + variable ──► stats::aggregate    ──► means, series, samples
//!   retained series      ──► ranking::rank       ──► per-lead-time rankings
//! ```
//!
//! The sample records feed an external polar-diagram renderer; the
//! rankings feed the console report. Everything is synchronous and owns
//! its output, so independent runs never share state.

pub mod data;
pub mod error;
pub mod ranking;
pub mod reference;
pub mod report;
pub mod stats;

pub use data::catalog::VariableCatalog;
pub use data::model::{
    ExperimentFileSet, ExperimentStatistics, ReferenceStatistics, SampleRecord, Series,
    VariableSpec, VerificationTable,
};
pub use error::ScamError;
pub use ranking::{DeviationMode, LeadTimeRanking};
pub use reference::ReferenceSplit;
pub use stats::Aggregation;
