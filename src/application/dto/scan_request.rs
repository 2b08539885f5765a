use crate::ports::outbound::ManifestCriteria;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// Manifest file name looked for by default
pub const DEFAULT_MANIFEST_NAME: &str = "package.json";

/// Directory names skipped by default: the npm dependency cache and the
/// Bruno API-client workspace
pub const DEFAULT_EXCLUDE_DIRS: [&str; 2] = ["node_modules", "bruno"];

/// Generator processes allowed to run at the same time by default
pub const DEFAULT_MAX_CONCURRENT_GENERATORS: usize = 4;

/// ScanRequest - Request DTO for the component collection use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Root directory of the walk
    pub root: PathBuf,
    /// Manifest name and excluded directory names
    pub criteria: ManifestCriteria,
    /// Upper bound on concurrently running generator processes
    pub max_concurrent_generators: usize,
}

impl ScanRequest {
    pub fn builder() -> ScanRequestBuilder {
        ScanRequestBuilder::default()
    }
}

/// Builder for [`ScanRequest`]; unset fields take the documented defaults
#[derive(Debug, Default)]
pub struct ScanRequestBuilder {
    root: Option<PathBuf>,
    manifest_name: Option<String>,
    exclude_dirs: Option<Vec<String>>,
    max_concurrent_generators: Option<usize>,
}

impl ScanRequestBuilder {
    pub fn root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = Some(name.into());
        self
    }

    pub fn exclude_dirs(mut self, dirs: Vec<String>) -> Self {
        self.exclude_dirs = Some(dirs);
        self
    }

    pub fn max_concurrent_generators(mut self, max: usize) -> Self {
        self.max_concurrent_generators = Some(max);
        self
    }

    pub fn build(self) -> Result<ScanRequest> {
        let manifest_name = self
            .manifest_name
            .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string());
        if manifest_name.trim().is_empty() {
            return Err(SbomError::Validation {
                message: "manifest name must not be empty".to_string(),
            }
            .into());
        }

        let exclude_dirs = self.exclude_dirs.unwrap_or_else(|| {
            DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
        });
        if exclude_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(SbomError::Validation {
                message: "excluded directory names must not be empty".to_string(),
            }
            .into());
        }

        let max_concurrent_generators = self
            .max_concurrent_generators
            .unwrap_or(DEFAULT_MAX_CONCURRENT_GENERATORS);
        if max_concurrent_generators == 0 {
            return Err(SbomError::Validation {
                message: "at least one generator process must be allowed".to_string(),
            }
            .into());
        }

        Ok(ScanRequest {
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            criteria: ManifestCriteria::new(manifest_name, exclude_dirs),
            max_concurrent_generators,
        })
    }
}
