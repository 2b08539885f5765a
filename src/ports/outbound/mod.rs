/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, subprocesses, console).
pub mod bom_generator;
pub mod license_text_repository;
pub mod manifest_locator;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_writer;

pub use bom_generator::BomGenerator;
pub use license_text_repository::LicenseTextRepository;
pub use manifest_locator::{ManifestCriteria, ManifestLocator, ManifestScan};
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_writer::ReportWriter;
