use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Series – one variable's values across forecast lead times
// ---------------------------------------------------------------------------

/// Ordered floating-point values indexed by lead time.
///
/// Index 0 is the analysis (initial) time. It participates in time-means
/// but is excluded from the comparison arithmetic in `ranking`.
pub type Series = Vec<f64>;

// ---------------------------------------------------------------------------
// VariableSpec – one entry of the variable catalog
// ---------------------------------------------------------------------------

/// A forecast field the evaluator can emit: its code (e.g. `VTMP-500`),
/// the table row it occupies, and a human-readable description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableSpec {
    pub code: String,
    pub column_index: usize,
    pub description: String,
}

// ---------------------------------------------------------------------------
// ExperimentFileSet – the statistic-file triple of one experiment
// ---------------------------------------------------------------------------

/// The three statistics files the evaluator writes per experiment.
///
/// Derived purely from the experiment name and the run's boundary
/// timestamps; nothing checks that the files exist until they are read.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentFileSet {
    pub experiment_name: String,
    /// Bias (VIES) table. Resolved but never read by the aggregation.
    pub bias_path: PathBuf,
    pub rmse_path: PathBuf,
    pub acor_path: PathBuf,
}

// ---------------------------------------------------------------------------
// VerificationTable – one parsed statistics file
// ---------------------------------------------------------------------------

/// A parsed verification table: one row per recorded quantity, one column
/// per forecast lead time. `rows[q][t]` is quantity `q` at lead time `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationTable {
    pub rows: Vec<Vec<f64>>,
}

impl VerificationTable {
    /// Number of recorded quantities (data lines in the file).
    pub fn n_quantities(&self) -> usize {
        self.rows.len()
    }

    /// Number of forecast lead times (fields per line, column 0 included).
    pub fn n_lead_times(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The full series of one quantity, if the table has that many rows.
    pub fn quantity(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

// ---------------------------------------------------------------------------
// Aggregation outputs
// ---------------------------------------------------------------------------

/// Time-means and retained series for the reference experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStatistics {
    pub experiment_name: String,
    pub mean_rmse: f64,
    pub mean_acor: f64,
    pub rmse_series: Series,
    pub acor_series: Series,
}

/// Same shape as [`ReferenceStatistics`], one per competitor, kept in
/// input order for the ranking engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentStatistics {
    pub experiment_name: String,
    pub mean_rmse: f64,
    pub mean_acor: f64,
    pub rmse_series: Series,
    pub acor_series: Series,
}

/// The triple handed to the external diagram renderer, one per competitor.
///
/// Order matters downstream (legend labeling) and always equals the input
/// experiment order with the reference occurrences removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    pub mean_rmse: f64,
    pub mean_acor: f64,
    pub experiment_name: String,
}
