use crate::sbom_generation::domain::ComponentRecord;
use std::path::PathBuf;

/// ScanResponse - Response DTO from the component collection use case
#[derive(Debug, Clone, Default)]
pub struct ScanResponse {
    /// Every extracted record, in manifest discovery order
    pub components: Vec<ComponentRecord>,
    /// Number of manifests the walk discovered
    pub manifests_found: usize,
    /// Manifests whose extraction failed; they contributed no records
    pub failed_manifests: Vec<PathBuf>,
}

impl ScanResponse {
    pub fn new(
        components: Vec<ComponentRecord>,
        manifests_found: usize,
        failed_manifests: Vec<PathBuf>,
    ) -> Self {
        Self {
            components,
            manifests_found,
            failed_manifests,
        }
    }

    /// Manifests that produced records (possibly zero of them)
    pub fn manifests_succeeded(&self) -> usize {
        self.manifests_found - self.failed_manifests.len()
    }
}
