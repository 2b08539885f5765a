use async_trait::async_trait;
use sbom_collect::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock BomGenerator answering from a per-manifest table
///
/// Manifests without an entry fail as if the generator exited non-zero.
#[derive(Default)]
pub struct MockBomGenerator {
    outputs: HashMap<PathBuf, Vec<ComponentRecord>>,
}

impl MockBomGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_components(mut self, manifest: PathBuf, components: Vec<ComponentRecord>) -> Self {
        self.outputs.insert(manifest, components);
        self
    }
}

#[async_trait]
impl BomGenerator for MockBomGenerator {
    async fn generate(&self, manifest: &Path) -> Result<Vec<ComponentRecord>> {
        self.outputs.get(manifest).cloned().ok_or_else(|| {
            anyhow::anyhow!(
                "SBOM generator exited with exit status: 1 for {}",
                manifest.display()
            )
        })
    }

    fn describe_command(&self, manifest: &Path) -> String {
        format!("mock-cyclonedx {}", manifest.display())
    }
}
