use crate::ports::outbound::LicenseTextRepository;
use crate::sbom_generation::domain::LicenseCatalog;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_regular_file, MAX_DATASET_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// License texts compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../../../../data/licenses.json");

/// Pseudo-path used in error messages for the bundled dataset
const BUNDLED_DATASET_NAME: &str = "<bundled licenses.json>";

/// One `{name, license}` entry of the dataset
#[derive(Debug, Deserialize)]
struct LicenseEntry {
    name: String,
    license: String,
}

/// BundledLicenseRepository adapter serving license texts
///
/// Reads the dataset compiled into the binary, or a replacement file with
/// the same shape when one is configured.
pub struct BundledLicenseRepository {
    dataset_path: Option<PathBuf>,
}

impl BundledLicenseRepository {
    /// Uses the bundled dataset
    pub fn new() -> Self {
        Self { dataset_path: None }
    }

    /// Uses the dataset at `path` instead of the bundled one
    pub fn with_dataset(path: PathBuf) -> Self {
        Self {
            dataset_path: Some(path),
        }
    }

    fn parse(raw: &str, source: &Path) -> Result<LicenseCatalog> {
        let entries: Vec<LicenseEntry> =
            serde_json::from_str(raw).map_err(|e| SbomError::LicenseDatasetError {
                path: source.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(LicenseCatalog::new(
            entries.into_iter().map(|entry| (entry.name, entry.license)),
        ))
    }

    fn read_dataset(path: &Path) -> Result<String> {
        validate_regular_file(path, "license dataset", MAX_DATASET_SIZE).map_err(|e| {
            SbomError::LicenseDatasetError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::LicenseDatasetError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for BundledLicenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseTextRepository for BundledLicenseRepository {
    fn load_catalog(&self) -> Result<LicenseCatalog> {
        match &self.dataset_path {
            Some(path) => {
                let raw = Self::read_dataset(path)?;
                Self::parse(&raw, path)
            }
            None => Self::parse(BUNDLED_DATASET, Path::new(BUNDLED_DATASET_NAME)),
        }
    }
}
