/// Data layer: core types, file-path resolution, table parsing, catalog.
///
/// Architecture:
/// ```text
///   experiment name + time window
///        │
///        ▼
///   ┌──────────┐
///   │  files    │  derive VIES/RMSE/ACOR paths → ExperimentFileSet
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  table    │  parse one .scam file → VerificationTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  catalog  │  variable code → table row → Series
///   └──────────┘
/// ```
pub mod catalog;
pub mod files;
pub mod model;
pub mod table;
