//! Statistics aggregation.
//!
//! Reads the RMSE and anomaly-correlation tables for the reference and
//! every competitor, extracts the selected variable's series, and
//! produces time-means plus the retained per-lead-time series the
//! ranking engine consumes. One aggregation run owns all of its output;
//! nothing is cached or shared between runs.

use std::path::Path;

use log::{debug, info};

use crate::data::catalog::VariableCatalog;
use crate::data::model::{
    ExperimentFileSet, ExperimentStatistics, ReferenceStatistics, SampleRecord, Series,
};
use crate::data::table;
use crate::error::{Result, ScamError};

/// Everything one aggregation run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub reference: ReferenceStatistics,
    /// Competitor statistics in input order.
    pub experiments: Vec<ExperimentStatistics>,
    /// Renderer hand-off triples, same order as `experiments`.
    pub samples: Vec<SampleRecord>,
}

/// Aggregate one variable across the reference and all competitors.
///
/// Any read or lookup failure aborts the whole aggregation: verification
/// numbers for a missing experiment make every downstream stage
/// meaningless. Series lengths are checked against the reference here so
/// the ranking engine never sees mismatched series.
pub fn aggregate(
    catalog: &VariableCatalog,
    variable_code: &str,
    reference_set: &ExperimentFileSet,
    competitor_sets: &[ExperimentFileSet],
) -> Result<Aggregation> {
    let rmse_series = variable_series(catalog, variable_code, &reference_set.rmse_path)?;
    let acor_series = variable_series(catalog, variable_code, &reference_set.acor_path)?;

    if acor_series.len() != rmse_series.len() {
        return Err(ScamError::SeriesLengthMismatch {
            experiment: reference_set.experiment_name.clone(),
            expected: rmse_series.len(),
            actual: acor_series.len(),
        });
    }

    let reference = ReferenceStatistics {
        experiment_name: reference_set.experiment_name.clone(),
        mean_rmse: mean(&rmse_series),
        mean_acor: mean(&acor_series),
        rmse_series,
        acor_series,
    };
    debug!(
        "reference {}: mean rmse {:.4}, mean acor {:.4}",
        reference.experiment_name, reference.mean_rmse, reference.mean_acor
    );

    let n_lead_times = reference.rmse_series.len();
    let mut experiments = Vec::with_capacity(competitor_sets.len());
    let mut samples = Vec::with_capacity(competitor_sets.len());

    for set in competitor_sets {
        let rmse_series = variable_series(catalog, variable_code, &set.rmse_path)?;
        let acor_series = variable_series(catalog, variable_code, &set.acor_path)?;

        for series in [&rmse_series, &acor_series] {
            if series.len() != n_lead_times {
                return Err(ScamError::SeriesLengthMismatch {
                    experiment: set.experiment_name.clone(),
                    expected: n_lead_times,
                    actual: series.len(),
                });
            }
        }

        let mean_rmse = mean(&rmse_series);
        let mean_acor = mean(&acor_series);
        debug!(
            "experiment {}: mean rmse {mean_rmse:.4}, mean acor {mean_acor:.4}",
            set.experiment_name
        );

        samples.push(SampleRecord {
            mean_rmse,
            mean_acor,
            experiment_name: set.experiment_name.clone(),
        });
        experiments.push(ExperimentStatistics {
            experiment_name: set.experiment_name.clone(),
            mean_rmse,
            mean_acor,
            rmse_series,
            acor_series,
        });
    }

    info!(
        "aggregated {variable_code}: reference {} plus {} experiments, {} lead times",
        reference.experiment_name,
        experiments.len(),
        n_lead_times
    );

    Ok(Aggregation {
        reference,
        experiments,
        samples,
    })
}

/// Read one table and pull out the selected variable's series.
fn variable_series(catalog: &VariableCatalog, code: &str, path: &Path) -> Result<Series> {
    let spec = catalog.resolve(code)?;
    let table = table::read(path)?;
    table
        .quantity(spec.column_index)
        .map(<[f64]>::to_vec)
        .ok_or_else(|| ScamError::MalformedTable {
            path: path.to_path_buf(),
            reason: format!(
                "no row {} for variable {code} (table has {} rows)",
                spec.column_index,
                table.n_quantities()
            ),
        })
}

/// Arithmetic mean over the whole series, analysis time included.
fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    series.iter().sum::<f64>() / series.len() as f64
}
