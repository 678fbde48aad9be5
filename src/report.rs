//! Presentation of an aggregation run: console report plus the CSV
//! hand-off consumed by the external diagram renderer.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::data::model::{SampleRecord, VariableSpec};
use crate::ranking::LeadTimeRanking;
use crate::stats::Aggregation;

/// Render the aggregation summary: reference means plus one line per
/// competitor sample, in hand-off order.
pub fn render_summary(variable: &VariableSpec, aggregation: &Aggregation) -> String {
    let mut out = String::new();
    let reference = &aggregation.reference;

    let _ = writeln!(out, "{} ({})", variable.description, variable.code);
    let _ = writeln!(
        out,
        "reference {}: mean rmse {:.6}, mean acor {:.6}",
        reference.experiment_name, reference.mean_rmse, reference.mean_acor
    );
    for sample in &aggregation.samples {
        let _ = writeln!(
            out,
            "  {:<12} mean rmse {:.6}, mean acor {:.6}",
            sample.experiment_name, sample.mean_rmse, sample.mean_acor
        );
    }
    out
}

/// Render the per-lead-time ranking, one block per outcome, mirroring
/// the order the tool has always printed them in: most precise, least
/// precise, most accurate, least accurate.
pub fn render_rankings(rankings: &[LeadTimeRanking]) -> String {
    let mut out = String::new();

    let blocks: [(&str, fn(&LeadTimeRanking) -> &[String]); 4] = [
        ("most precise", |r| &r.most_precise),
        ("least precise", |r| &r.least_precise),
        ("most accurate", |r| &r.most_accurate),
        ("least accurate", |r| &r.least_accurate),
    ];

    for (label, pick) in blocks {
        for ranking in rankings {
            for name in pick(ranking) {
                let _ = writeln!(out, "{label} at {:>3} h: {name}", ranking.lead_hours);
            }
        }
        let _ = writeln!(out);
    }
    out
}

/// Write the sample triples as CSV for the diagram renderer.
pub fn write_samples_csv<W: Write>(writer: W, samples: &[SampleRecord]) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for sample in samples {
        csv_writer
            .serialize(sample)
            .with_context(|| format!("serializing sample for {}", sample.experiment_name))?;
    }
    csv_writer.flush().context("flushing samples CSV")?;
    Ok(())
}

/// Write the sample CSV to a file path.
pub fn write_samples_csv_file(path: &Path, samples: &[SampleRecord]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating samples CSV {}", path.display()))?;
    write_samples_csv(file, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_csv_preserves_order() {
        let samples = vec![
            SampleRecord {
                mean_rmse: 10.03,
                mean_acor: 0.88,
                experiment_name: "EnKF".to_string(),
            },
            SampleRecord {
                mean_rmse: 10.01,
                mean_acor: 0.90,
                experiment_name: "NCEP".to_string(),
            },
        ];

        let mut buf = Vec::new();
        write_samples_csv(&mut buf, &samples).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "mean_rmse,mean_acor,experiment_name");
        assert!(lines[1].ends_with("EnKF"));
        assert!(lines[2].ends_with("NCEP"));
    }

    #[test]
    fn ranking_report_prints_all_tied_names() {
        let rankings = vec![LeadTimeRanking {
            lead_hours: 6,
            most_precise: vec!["A".to_string(), "B".to_string()],
            least_precise: vec!["C".to_string()],
            most_accurate: vec!["A".to_string()],
            least_accurate: vec!["C".to_string()],
        }];

        let text = render_rankings(&rankings);
        assert!(text.contains("most precise at   6 h: A"));
        assert!(text.contains("most precise at   6 h: B"));
        assert!(text.contains("least accurate at   6 h: C"));
    }
}
