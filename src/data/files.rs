use std::path::PathBuf;

use crate::data::model::ExperimentFileSet;

/// Derive the statistic-file triple for one experiment.
///
/// The evaluator writes `./<exp>/<KIND>EXP01_<start><end>T.scam` with
/// KIND in {VIES, RMSE, ACOR}. The timestamp tokens are embedded
/// verbatim; this is pure string construction with no filesystem access.
pub fn resolve(experiment_name: &str, start_time: &str, end_time: &str) -> ExperimentFileSet {
    let kind_path =
        |kind: &str| PathBuf::from(format!("./{experiment_name}/{kind}EXP01_{start_time}{end_time}T.scam"));

    ExperimentFileSet {
        experiment_name: experiment_name.to_string(),
        bias_path: kind_path("VIES"),
        rmse_path: kind_path("RMSE"),
        acor_path: kind_path("ACOR"),
    }
}

/// Resolve file sets for a whole experiment list, preserving order.
pub fn resolve_all(
    experiment_names: &[String],
    start_time: &str,
    end_time: &str,
) -> Vec<ExperimentFileSet> {
    experiment_names
        .iter()
        .map(|name| resolve(name, start_time, end_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn builds_the_three_kind_paths() {
        let set = resolve("EnSRF", "2013010100", "2013013118");
        assert_eq!(set.experiment_name, "EnSRF");
        assert_eq!(
            set.bias_path,
            Path::new("./EnSRF/VIESEXP01_20130101002013013118T.scam")
        );
        assert_eq!(
            set.rmse_path,
            Path::new("./EnSRF/RMSEEXP01_20130101002013013118T.scam")
        );
        assert_eq!(
            set.acor_path,
            Path::new("./EnSRF/ACOREXP01_20130101002013013118T.scam")
        );
    }

    #[test]
    fn is_deterministic() {
        let a = resolve("CTRL", "2013010100", "2013013118");
        let b = resolve("CTRL", "2013010100", "2013013118");
        assert_eq!(a, b);
    }
}
