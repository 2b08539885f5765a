use crate::sbom_generation::domain::LicenseCatalog;
use crate::shared::Result;

/// LicenseTextRepository port for the license-text reference dataset
pub trait LicenseTextRepository {
    /// Loads the full identifier-to-text catalog
    ///
    /// # Errors
    /// Returns an error if the dataset cannot be read or is malformed
    fn load_catalog(&self) -> Result<LicenseCatalog>;
}
