use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::outbound::{BomGenerator, ManifestLocator, ManifestScan, ProgressReporter};
use crate::sbom_generation::domain::ComponentRecord;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// CollectComponentsUseCase - walks a tree and aggregates generator output
///
/// Orchestrates the three phases of a scan:
/// 1. locate every manifest under the root
/// 2. run the SBOM generator on each, at most `max_concurrent_generators`
///    at a time
/// 3. concatenate the records of every successful run in discovery order
///
/// Per-manifest and per-directory failures are reported and skipped; they
/// never abort the scan.
///
/// # Type Parameters
/// * `ML` - ManifestLocator implementation
/// * `BG` - BomGenerator implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectComponentsUseCase<ML, BG, PR> {
    manifest_locator: ML,
    bom_generator: BG,
    progress_reporter: PR,
}

impl<ML, BG, PR> CollectComponentsUseCase<ML, BG, PR>
where
    ML: ManifestLocator,
    BG: BomGenerator,
    PR: ProgressReporter,
{
    /// Creates a new CollectComponentsUseCase with injected dependencies
    pub fn new(manifest_locator: ML, bom_generator: BG, progress_reporter: PR) -> Self {
        Self {
            manifest_locator,
            bom_generator,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Returns
    /// ScanResponse with the aggregated records and per-manifest outcome counts
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Walk the tree
        let scan = self.locate_manifests(&request).await;
        let manifests_found = scan.manifests.len();

        if manifests_found == 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No {} found under {}",
                request.criteria.manifest_name,
                request.root.display()
            ));
            return Ok(ScanResponse::default());
        }

        // Step 2: Extract, bounded
        let outcomes = self
            .extract_all(&scan.manifests, request.max_concurrent_generators)
            .await;

        // Step 3: Aggregate in discovery order
        let (components, failed_manifests) = Self::aggregate(outcomes);

        self.progress_reporter.report_completion(&format!(
            "✅ Dependency collection complete: {} component(s) from {} manifest(s), {} failed",
            components.len(),
            manifests_found,
            failed_manifests.len()
        ));

        Ok(ScanResponse::new(
            components,
            manifests_found,
            failed_manifests,
        ))
    }

    /// Walks the tree and reports what was found, skipped, or unreadable
    async fn locate_manifests(&self, request: &ScanRequest) -> ManifestScan {
        self.progress_reporter.report(&format!(
            "🔍 Scanning for {} under: {}",
            request.criteria.manifest_name,
            request.root.display()
        ));

        let scan = self
            .manifest_locator
            .locate(&request.root, &request.criteria)
            .await;

        for dir in &scan.skipped_dirs {
            self.progress_reporter
                .report(&format!("⏭️  Skipping excluded directory: {}", dir.display()));
        }
        for (dir, error) in &scan.read_failures {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Failed to read directory {}: {}",
                dir.display(),
                error
            ));
        }
        for manifest in &scan.manifests {
            self.progress_reporter.report(&format!(
                "📦 Found {} at: {}",
                request.criteria.manifest_name,
                manifest.display()
            ));
        }

        self.progress_reporter.report(&format!(
            "✅ Detected {} manifest(s)",
            scan.manifests.len()
        ));

        scan
    }

    /// Runs the generator on every manifest
    ///
    /// `buffered` keeps at most `max_concurrent` generators alive and yields
    /// results in input order, whatever order they finish in.
    async fn extract_all(
        &self,
        manifests: &[PathBuf],
        max_concurrent: usize,
    ) -> Vec<(PathBuf, Result<Vec<ComponentRecord>>)> {
        let total = manifests.len();
        let completed = AtomicUsize::new(0);

        stream::iter(manifests)
            .map(|manifest| {
                let completed = &completed;
                async move {
                    self.progress_reporter.report(&format!(
                        "🛠️  Running command: {}",
                        self.bom_generator.describe_command(manifest)
                    ));

                    let result = self.bom_generator.generate(manifest).await;

                    match &result {
                        Ok(records) => self.progress_reporter.report(&format!(
                            "   {} component(s) from {}",
                            records.len(),
                            manifest.display()
                        )),
                        Err(e) => self.progress_reporter.report_error(&format!(
                            "❌ Error processing {}: {}",
                            manifest.display(),
                            e
                        )),
                    }

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    self.progress_reporter.report_progress(
                        done,
                        total,
                        Some("Generating SBOMs..."),
                    );

                    (manifest.clone(), result)
                }
            })
            .buffered(max_concurrent.max(1))
            .collect()
            .await
    }

    /// Concatenates successful batches; failed manifests contribute nothing
    fn aggregate(
        outcomes: Vec<(PathBuf, Result<Vec<ComponentRecord>>)>,
    ) -> (Vec<ComponentRecord>, Vec<PathBuf>) {
        let mut components = Vec::new();
        let mut failed = Vec::new();

        for (manifest, outcome) in outcomes {
            match outcome {
                Ok(records) => components.extend(records),
                Err(_) => failed.push(manifest),
            }
        }

        (components, failed)
    }
}
