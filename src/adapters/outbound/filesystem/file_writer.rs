use crate::ports::outbound::ReportWriter;
use crate::shared::error::SbomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing reports into an output directory
///
/// This adapter implements the ReportWriter port. Existing reports are
/// overwritten; symbolic links are never written through.
pub struct FileSystemWriter {
    output_dir: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Validates that the output directory exists before writing
    fn validate_output_dir(&self, target: &Path) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(SbomError::FileWriteError {
                path: target.to_path_buf(),
                details: format!(
                    "Output directory does not exist: {}",
                    self.output_dir.display()
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Rejects an existing target that is a symbolic link
    fn validate_target(&self, target: &Path) -> Result<()> {
        if fs::symlink_metadata(target).is_ok() {
            validate_not_symlink(target, "write").map_err(|e| SbomError::FileWriteError {
                path: target.to_path_buf(),
                details: e.to_string(),
            })?;
        }
        Ok(())
    }
}

impl ReportWriter for FileSystemWriter {
    fn write_report(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let target = self.output_dir.join(file_name);

        self.validate_output_dir(&target)?;
        self.validate_target(&target)?;

        fs::write(&target, content).map_err(|e| SbomError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_success() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());

        let path = writer.write_report("sbom.txt", "OSS LIST\n").unwrap();

        assert_eq!(path, temp_dir.path().join("sbom.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "OSS LIST\n");
    }

    #[test]
    fn test_write_report_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("sbom.txt"), "old content that is longer").unwrap();
        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());

        writer.write_report("sbom.txt", "new").unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("sbom.txt")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_write_report_missing_output_dir() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory"));

        let err = writer.write_report("sbom.txt", "content").unwrap_err();

        assert!(err.to_string().contains("Output directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_report_refuses_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = temp_dir.path().join("elsewhere.txt");
        fs::write(&elsewhere, "keep me").unwrap();
        std::os::unix::fs::symlink(&elsewhere, temp_dir.path().join("sbom.txt")).unwrap();
        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());

        let err = writer.write_report("sbom.txt", "content").unwrap_err();

        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&elsewhere).unwrap(), "keep me");
    }
}
