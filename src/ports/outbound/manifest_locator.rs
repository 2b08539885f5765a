use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Rules deciding which files count as manifests and which directories are skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestCriteria {
    /// Exact file name of a manifest (e.g. `package.json`)
    pub manifest_name: String,
    /// Directory base names whose whole subtree is ignored
    pub exclude_dirs: Vec<String>,
}

impl ManifestCriteria {
    pub fn new(manifest_name: impl Into<String>, exclude_dirs: Vec<String>) -> Self {
        Self {
            manifest_name: manifest_name.into(),
            exclude_dirs,
        }
    }

    /// True when the directory's base name is on the exclusion list
    pub fn is_excluded_dir(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.exclude_dirs.iter().any(|ex| ex == name))
    }

    /// True when the file name matches the manifest name exactly
    pub fn is_manifest(&self, file_name: &str) -> bool {
        file_name == self.manifest_name
    }
}

/// Outcome of one tree walk
///
/// Directory read failures do not abort the walk; they are collected here
/// so the caller can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestScan {
    /// Manifest paths in discovery order
    pub manifests: Vec<PathBuf>,
    /// Directories skipped because of the exclusion list
    pub skipped_dirs: Vec<PathBuf>,
    /// Directories that could not be listed, with the error message
    pub read_failures: Vec<(PathBuf, String)>,
}

impl ManifestScan {
    /// Appends another (sub-)scan, keeping its order after ours
    pub fn merge(&mut self, other: ManifestScan) {
        self.manifests.extend(other.manifests);
        self.skipped_dirs.extend(other.skipped_dirs);
        self.read_failures.extend(other.read_failures);
    }
}

/// ManifestLocator port for discovering manifests under a root directory
#[async_trait]
pub trait ManifestLocator: Send + Sync {
    /// Walks the tree rooted at `root` and returns every manifest found
    ///
    /// Never fails as a whole: unreadable directories end up in
    /// `ManifestScan::read_failures`.
    async fn locate(&self, root: &Path, criteria: &ManifestCriteria) -> ManifestScan;
}
