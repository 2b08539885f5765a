use crate::sbom_generation::domain::ComponentRecord;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// BomGenerator port for turning one manifest into component records
///
/// Implementations wrap an external SBOM tool. A failure is scoped to the
/// manifest being processed; callers log it and move on.
#[async_trait]
pub trait BomGenerator: Send + Sync {
    /// Runs the generator against `manifest` and projects its components
    ///
    /// # Errors
    /// Returns an error if:
    /// - The generator cannot be started or exits unsuccessfully
    /// - Its output exceeds the configured size ceiling
    /// - Its output is not a BOM document with a `components` list
    async fn generate(&self, manifest: &Path) -> Result<Vec<ComponentRecord>>;

    /// Human-readable command line used for `manifest`, for progress logs
    fn describe_command(&self, manifest: &Path) -> String;
}
