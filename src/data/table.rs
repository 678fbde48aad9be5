use std::fs;
use std::path::Path;

use crate::data::model::VerificationTable;
use crate::error::{Result, ScamError};

/// Parse one verification table.
///
/// The first line is a header and is discarded. Every remaining line is
/// whitespace-delimited numeric fields: one line per recorded quantity,
/// one field per forecast lead time (field 0 = analysis time). Each call
/// re-reads from storage; nothing is cached.
pub fn read(path: &Path) -> Result<VerificationTable> {
    let text = fs::read_to_string(path).map_err(|source| ScamError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows: Vec<Vec<f64>> = Vec::new();

    // line_no is 1-based over the whole file, header included.
    for (line_no, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| ScamError::MalformedTable {
                    path: path.to_path_buf(),
                    reason: format!("line {}: '{tok}' is not a number", line_no + 1),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ScamError::MalformedTable {
                    path: path.to_path_buf(),
                    reason: format!(
                        "line {}: {} fields, expected {}",
                        line_no + 1,
                        row.len(),
                        first.len()
                    ),
                });
            }
        }
        rows.push(row);
    }

    Ok(VerificationTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("scamrank_table_{name}_{}", std::process::id()));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parses_header_plus_rows() {
        let path = write_temp("ok", "H\n0 1 2\n3 4 5\n");
        let table = read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(table.rows, vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(table.n_quantities(), 2);
        assert_eq!(table.n_lead_times(), 3);
    }

    #[test]
    fn rejects_ragged_rows() {
        let path = write_temp("ragged", "H\n0 1 2\n3 4\n");
        let err = read(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, ScamError::MalformedTable { .. }));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let path = write_temp("nan", "H\n0 one 2\n");
        let err = read(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, ScamError::MalformedTable { .. }));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = read(Path::new("/nonexistent/RMSEEXP01_x.scam")).unwrap_err();
        assert!(matches!(err, ScamError::UnreadableFile { .. }));
    }
}
