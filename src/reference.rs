//! Reference detection.
//!
//! The invocation convention marks the reference experiment by naming it
//! twice in the raw list. This module is the only place that convention
//! is interpreted; everything downstream works with the explicit
//! reference/competitors split returned here.

use crate::error::{Result, ScamError};

/// The resolved experiment list: one reference, the competitors in their
/// original input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSplit {
    pub reference: String,
    pub competitors: Vec<String>,
}

/// Scan the raw experiment-name list for the single name that occurs
/// exactly twice.
///
/// Counting preserves first-seen order, so with several duplicates the
/// error names the first two qualifying names deterministically. The
/// competitor list is the input sequence with *every* occurrence of the
/// reference name removed; other names are not deduplicated.
pub fn resolve(raw_experiment_names: &[String]) -> Result<ReferenceSplit> {
    // (name, count) pairs in first-seen order.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for name in raw_experiment_names {
        match counts.iter_mut().find(|(n, _)| *n == name.as_str()) {
            Some((_, c)) => *c += 1,
            None => counts.push((name.as_str(), 1)),
        }
    }

    let mut qualifying = counts.iter().filter(|&&(_, c)| c == 2);
    let reference = match qualifying.next() {
        Some(&(name, _)) => name.to_string(),
        None => return Err(ScamError::NoReferenceFound),
    };
    if let Some(&(second, _)) = qualifying.next() {
        return Err(ScamError::AmbiguousReference(
            reference,
            second.to_string(),
        ));
    }

    let competitors = raw_experiment_names
        .iter()
        .filter(|name| **name != reference)
        .cloned()
        .collect();

    Ok(ReferenceSplit {
        reference,
        competitors,
    })
}
