//! Comparative ranking.
//!
//! For every forecast lead time past the analysis, measures how far each
//! competitor sits from the reference on the RMSE series (precision) and
//! the anomaly-correlation series (accuracy), and reports the closest and
//! farthest experiments per lead time.

use crate::data::model::{ExperimentStatistics, ReferenceStatistics};
use crate::error::{Result, ScamError};

/// Hours between consecutive lead times of the upstream evaluator.
const LEAD_STEP_HOURS: u32 = 6;

// ---------------------------------------------------------------------------
// Deviation operator
// ---------------------------------------------------------------------------

/// How a competitor's value is compared against the reference's.
///
/// `Remainder` replicates the historical behavior: the remainder of
/// dividing the larger value by the smaller. It is not a distance metric
/// (10 vs 3 and 10 vs 9 both give 1), but existing runs depend on its
/// output, so it stays the default. `AbsoluteDifference` is the corrected
/// metric, available by explicit opt-in only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviationMode {
    #[default]
    Remainder,
    AbsoluteDifference,
}

impl DeviationMode {
    fn deviation(self, value: f64, reference: f64) -> f64 {
        match self {
            DeviationMode::Remainder => {
                if value > reference {
                    value % reference
                } else {
                    reference % value
                }
            }
            DeviationMode::AbsoluteDifference => (value - reference).abs(),
        }
    }
}

// ---------------------------------------------------------------------------
// Ranking result
// ---------------------------------------------------------------------------

/// The four outcomes at one lead time. Ties are not broken: every
/// experiment sharing the extreme deviation is listed, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadTimeRanking {
    pub lead_hours: u32,
    pub most_precise: Vec<String>,
    pub least_precise: Vec<String>,
    pub most_accurate: Vec<String>,
    pub least_accurate: Vec<String>,
}

/// Rank all competitors against the reference, one result per lead time
/// from index 1 to the end of the series (index 0 is the analysis time
/// and never compared).
pub fn rank(
    reference: &ReferenceStatistics,
    experiments: &[ExperimentStatistics],
    mode: DeviationMode,
) -> Result<Vec<LeadTimeRanking>> {
    let n_lead_times = reference.rmse_series.len();
    check_length(
        &reference.experiment_name,
        n_lead_times,
        reference.acor_series.len(),
    )?;
    for exp in experiments {
        check_length(&exp.experiment_name, n_lead_times, exp.rmse_series.len())?;
        check_length(&exp.experiment_name, n_lead_times, exp.acor_series.len())?;
    }

    if experiments.is_empty() {
        return Ok(Vec::new());
    }

    let mut rankings = Vec::with_capacity(n_lead_times.saturating_sub(1));
    for t in 1..n_lead_times {
        let precision: Vec<f64> = experiments
            .iter()
            .map(|e| mode.deviation(e.rmse_series[t], reference.rmse_series[t]))
            .collect();
        let accuracy: Vec<f64> = experiments
            .iter()
            .map(|e| mode.deviation(e.acor_series[t], reference.acor_series[t]))
            .collect();

        rankings.push(LeadTimeRanking {
            lead_hours: t as u32 * LEAD_STEP_HOURS,
            most_precise: matching(experiments, &precision, fold_min(&precision)),
            least_precise: matching(experiments, &precision, fold_max(&precision)),
            most_accurate: matching(experiments, &accuracy, fold_min(&accuracy)),
            least_accurate: matching(experiments, &accuracy, fold_max(&accuracy)),
        });
    }

    Ok(rankings)
}

fn check_length(experiment: &str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(ScamError::SeriesLengthMismatch {
            experiment: experiment.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn fold_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn fold_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Every experiment whose deviation equals the extreme, in input order.
/// Exact equality on purpose: ties report all matches.
fn matching(experiments: &[ExperimentStatistics], deviations: &[f64], extreme: f64) -> Vec<String> {
    experiments
        .iter()
        .zip(deviations.iter())
        .filter(|(_, d)| **d == extreme)
        .map(|(e, _)| e.experiment_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(rmse: Vec<f64>, acor: Vec<f64>) -> ReferenceStatistics {
        ReferenceStatistics {
            experiment_name: "CTRL".to_string(),
            mean_rmse: 0.0,
            mean_acor: 0.0,
            rmse_series: rmse,
            acor_series: acor,
        }
    }

    fn experiment(name: &str, rmse: Vec<f64>, acor: Vec<f64>) -> ExperimentStatistics {
        ExperimentStatistics {
            experiment_name: name.to_string(),
            mean_rmse: 0.0,
            mean_acor: 0.0,
            rmse_series: rmse,
            acor_series: acor,
        }
    }

    #[test]
    fn remainder_takes_larger_modulo_smaller() {
        let mode = DeviationMode::Remainder;
        assert_eq!(mode.deviation(10.0, 3.0), 1.0);
        assert_eq!(mode.deviation(3.0, 10.0), 1.0);
        assert_eq!(mode.deviation(10.0, 9.0), 1.0);
    }

    #[test]
    fn absolute_difference_is_symmetric() {
        let mode = DeviationMode::AbsoluteDifference;
        assert_eq!(mode.deviation(10.0, 3.0), 7.0);
        assert_eq!(mode.deviation(3.0, 10.0), 7.0);
    }

    #[test]
    fn one_result_per_lead_time_past_analysis() {
        let r = reference(vec![1.0, 1.0, 1.0, 1.0], vec![1.0, 0.9, 0.8, 0.7]);
        let exps = vec![
            experiment("A", vec![1.0, 1.2, 1.3, 1.4], vec![1.0, 0.8, 0.7, 0.6]),
            experiment("B", vec![1.0, 1.5, 1.6, 1.7], vec![1.0, 0.5, 0.4, 0.3]),
        ];
        let rankings = rank(&r, &exps, DeviationMode::AbsoluteDifference).unwrap();

        assert_eq!(rankings.len(), 3);
        assert_eq!(rankings[0].lead_hours, 6);
        assert_eq!(rankings[1].lead_hours, 12);
        assert_eq!(rankings[2].lead_hours, 18);

        // A sits closer to the reference on both axes at every lead time.
        for r in &rankings {
            assert_eq!(r.most_precise, vec!["A"]);
            assert_eq!(r.least_precise, vec!["B"]);
            assert_eq!(r.most_accurate, vec!["A"]);
            assert_eq!(r.least_accurate, vec!["B"]);
        }
    }

    #[test]
    fn ties_report_every_match() {
        let r = reference(vec![1.0, 2.0], vec![1.0, 0.9]);
        let exps = vec![
            experiment("A", vec![1.0, 2.5], vec![1.0, 0.8]),
            experiment("B", vec![1.0, 2.5], vec![1.0, 0.8]),
        ];
        let rankings = rank(&r, &exps, DeviationMode::AbsoluteDifference).unwrap();

        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].most_precise, vec!["A", "B"]);
        assert_eq!(rankings[0].least_precise, vec!["A", "B"]);
        assert_eq!(rankings[0].most_accurate, vec!["A", "B"]);
        assert_eq!(rankings[0].least_accurate, vec!["A", "B"]);
    }

    #[test]
    fn mismatched_series_length_is_an_error() {
        let r = reference(vec![1.0, 2.0, 3.0], vec![1.0, 0.9, 0.8]);
        let exps = vec![experiment("A", vec![1.0, 2.0], vec![1.0, 0.9, 0.8])];
        let err = rank(&r, &exps, DeviationMode::Remainder).unwrap_err();

        assert!(matches!(
            err,
            ScamError::SeriesLengthMismatch { experiment, expected: 3, actual: 2 }
                if experiment == "A"
        ));
    }

    #[test]
    fn analysis_time_never_ranked() {
        // Index 0 differs wildly but must not influence any result.
        let r = reference(vec![100.0, 1.0], vec![100.0, 0.9]);
        let exps = vec![
            experiment("A", vec![0.001, 1.1], vec![0.001, 0.8]),
            experiment("B", vec![500.0, 1.9], vec![500.0, 0.2]),
        ];
        let rankings = rank(&r, &exps, DeviationMode::AbsoluteDifference).unwrap();

        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].most_precise, vec!["A"]);
    }

    #[test]
    fn no_competitors_yields_no_rankings() {
        let r = reference(vec![1.0, 2.0], vec![1.0, 0.9]);
        assert!(rank(&r, &[], DeviationMode::Remainder).unwrap().is_empty());
    }
}
