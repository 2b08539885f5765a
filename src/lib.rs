//! sbom-collect - SBOM collection tool for npm monorepos
//!
//! This library walks a directory tree for `package.json` manifests, runs an
//! external CycloneDX generator on each one, and renders the aggregated
//! components as plain-text license reports. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Component records, the license catalog, license queries
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_collect::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let reporter = StderrProgressReporter::new();
//! let catalog = BundledLicenseRepository::new().load_catalog()?;
//!
//! let collect = CollectComponentsUseCase::new(
//!     FileSystemWalker::new(),
//!     CycloneDxNpmGenerator::default(),
//!     &reporter,
//! );
//! let request = ScanRequest::builder().root(PathBuf::from(".")).build()?;
//! let response = collect.execute(request).await?;
//!
//! let publish = PublishReportsUseCase::new(FileSystemWriter::new(PathBuf::from(".")), &reporter);
//! publish.execute(&response.components, &catalog)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWalker, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{
        ComponentListFormatter, UniqueLicenseFormatter,
    };
    pub use crate::adapters::outbound::generator::CycloneDxNpmGenerator;
    pub use crate::adapters::outbound::licenses::BundledLicenseRepository;
    pub use crate::application::dto::{ScanRequest, ScanResponse};
    pub use crate::application::use_cases::{CollectComponentsUseCase, PublishReportsUseCase};
    pub use crate::ports::outbound::{
        BomGenerator, LicenseTextRepository, ManifestCriteria, ManifestLocator, ManifestScan,
        ProgressReporter, ReportFormatter, ReportWriter,
    };
    pub use crate::sbom_generation::domain::{ComponentRecord, LicenseCatalog};
    pub use crate::sbom_generation::services::LicenseAnalyzer;
    pub use crate::shared::Result;
}
