use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::data::model::VariableSpec;
use crate::error::{Result, ScamError};

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

/// Every field the evaluator writes into its tables, in row order.
/// Row 0 is the lead-time axis itself, not a forecast quantity.
const BUILTIN: &[(&str, usize, &str)] = &[
    ("%Previsao", 0, "Forecast lead time (hours)"),
    ("VTMP-925", 1, "Virtual temperature at 925 hPa"),
    ("VTMP-850", 2, "Virtual temperature at 850 hPa"),
    ("VTMP-500", 3, "Virtual temperature at 500 hPa"),
    ("TEMP-850", 4, "Air temperature at 850 hPa"),
    ("TEMP-500", 5, "Air temperature at 500 hPa"),
    ("TEMP-250", 6, "Air temperature at 250 hPa"),
    ("PSNM-000", 7, "Surface pressure"),
    ("UMES-925", 8, "Specific humidity at 925 hPa"),
    ("UMES-850", 9, "Specific humidity at 850 hPa"),
    ("UMES-500", 10, "Specific humidity at 500 hPa"),
    ("AGPL-925", 11, "Precipitable water at 925 hPa"),
    ("ZGEO-850", 12, "Geopotential height at 850 hPa"),
    ("ZGEO-500", 13, "Geopotential height at 500 hPa"),
    ("ZGEO-250", 14, "Geopotential height at 250 hPa"),
    ("UVEL-850", 15, "Zonal wind at 850 hPa"),
    ("UVEL-500", 16, "Zonal wind at 500 hPa"),
    ("UVEL-250", 17, "Zonal wind at 250 hPa"),
    ("VVEL-850", 18, "Meridional wind at 850 hPa"),
    ("VVEL-500", 19, "Meridional wind at 500 hPa"),
    ("VVEL-250", 20, "Meridional wind at 250 hPa"),
    ("PREC-000", 21, "Convective precipitation"),
    ("PREV-000", 22, "Stratiform precipitation"),
];

// ---------------------------------------------------------------------------
// VariableCatalog
// ---------------------------------------------------------------------------

/// Immutable variable-code → table-row mapping, loaded once per run.
#[derive(Debug, Clone)]
pub struct VariableCatalog {
    entries: BTreeMap<String, VariableSpec>,
}

impl VariableCatalog {
    /// The fixed table shipped with the evaluator.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(code, column_index, description)| {
                (
                    code.to_string(),
                    VariableSpec {
                        code: code.to_string(),
                        column_index,
                        description: description.to_string(),
                    },
                )
            })
            .collect();
        VariableCatalog { entries }
    }

    /// Load a catalog from a JSON array of `VariableSpec` objects,
    /// replacing the built-in table entirely.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ScamError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        let specs: Vec<VariableSpec> =
            serde_json::from_str(&text).map_err(|e| ScamError::MalformedTable {
                path: path.to_path_buf(),
                reason: format!("invalid catalog JSON: {e}"),
            })?;

        let entries = specs
            .into_iter()
            .map(|spec| (spec.code.clone(), spec))
            .collect();
        Ok(VariableCatalog { entries })
    }

    /// Look up a variable code. Pure lookup, no side effects.
    pub fn resolve(&self, code: &str) -> Result<&VariableSpec> {
        self.entries
            .get(code)
            .ok_or_else(|| ScamError::UnknownVariable(code.to_string()))
    }
}
