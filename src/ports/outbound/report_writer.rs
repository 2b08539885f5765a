use crate::shared::Result;
use std::path::PathBuf;

/// ReportWriter port for persisting finished reports
pub trait ReportWriter {
    /// Writes `content` under `file_name`, replacing any previous report
    ///
    /// # Returns
    /// The path the report was written to
    ///
    /// # Errors
    /// Returns an error if:
    /// - The output directory does not exist
    /// - The target is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn write_report(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
