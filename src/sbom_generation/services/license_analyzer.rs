use crate::sbom_generation::domain::ComponentRecord;
use std::collections::HashSet;

/// LicenseAnalyzer service for license-level queries over the aggregate
///
/// Pure functions over collected records; no I/O.
pub struct LicenseAnalyzer;

impl LicenseAnalyzer {
    /// Returns every distinct license identifier in first-seen order
    ///
    /// Licenses are flattened record by record, in aggregate order, so the
    /// result is stable for a given aggregate.
    pub fn unique_licenses(components: &[ComponentRecord]) -> Vec<String> {
        let mut seen = HashSet::new();
        components
            .iter()
            .filter_map(ComponentRecord::licenses)
            .flatten()
            .filter(|license| seen.insert(license.as_str()))
            .cloned()
            .collect()
    }

    /// Returns the records that carry no license metadata at all
    pub fn without_licenses(components: &[ComponentRecord]) -> Vec<ComponentRecord> {
        components
            .iter()
            .filter(|c| !c.has_licenses())
            .cloned()
            .collect()
    }
}
