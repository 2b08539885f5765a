use crate::adapters::outbound::formatters::{ComponentListFormatter, UniqueLicenseFormatter};
use crate::ports::outbound::{ProgressReporter, ReportFormatter, ReportWriter};
use crate::sbom_generation::domain::{ComponentRecord, LicenseCatalog};
use crate::sbom_generation::services::LicenseAnalyzer;
use crate::shared::Result;
use std::path::PathBuf;

pub const FULL_LIST_FILE: &str = "sbom.txt";
pub const UNIQUE_LICENSES_FILE: &str = "unique-licenses.txt";
pub const UNDEFINED_LICENSES_FILE: &str = "undef-license.txt";

/// PublishReportsUseCase - renders the aggregate and writes the three reports
///
/// `sbom.txt` and `unique-licenses.txt` are always written.
/// `undef-license.txt` is written only when some record carries no licenses.
pub struct PublishReportsUseCase<RW, PR> {
    report_writer: RW,
    progress_reporter: PR,
}

impl<RW, PR> PublishReportsUseCase<RW, PR>
where
    RW: ReportWriter,
    PR: ProgressReporter,
{
    pub fn new(report_writer: RW, progress_reporter: PR) -> Self {
        Self {
            report_writer,
            progress_reporter,
        }
    }

    /// Writes every report and returns the paths written, in write order
    ///
    /// # Errors
    /// Fails on the first report that cannot be written
    pub fn execute(
        &self,
        components: &[ComponentRecord],
        catalog: &LicenseCatalog,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        self.progress_reporter.report("📝 Writing reports...");

        let full_list = ComponentListFormatter::full_list().format(components);
        written.push(self.write(FULL_LIST_FILE, &full_list)?);

        let unique = UniqueLicenseFormatter::new(catalog);
        for license in unique.missing_texts(components) {
            self.progress_reporter
                .report_error(&format!("⚠️  License for {} not found", license));
        }
        written.push(self.write(UNIQUE_LICENSES_FILE, &unique.format(components))?);

        let undefined = LicenseAnalyzer::without_licenses(components);
        if !undefined.is_empty() {
            self.progress_reporter.report(&format!(
                "⚠️  {} component(s) without license information",
                undefined.len()
            ));
            let content = ComponentListFormatter::undefined_licenses().format(&undefined);
            written.push(self.write(UNDEFINED_LICENSES_FILE, &content)?);
        }

        Ok(written)
    }

    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.report_writer.write_report(file_name, content)?;
        self.progress_reporter
            .report(&format!("💾 Wrote {}", path.display()));
        Ok(path)
    }
}
