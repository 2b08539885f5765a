use super::bom_document::BomDocument;
use crate::ports::outbound::BomGenerator;
use crate::sbom_generation::domain::ComponentRecord;
use crate::shared::error::SbomError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Default generator program
pub const DEFAULT_GENERATOR_COMMAND: &str = "npx";

/// Default leading arguments: the CycloneDX npm package and the flag that
/// keeps npm's own non-fatal diagnostics from failing the run
pub const DEFAULT_GENERATOR_ARGS: [&str; 2] = ["@cyclonedx/cyclonedx-npm", "--ignore-npm-errors"];

/// Default ceiling on captured generator output (about 10 MB)
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 1024 * 10_000;

/// CycloneDxNpmGenerator adapter running an external CycloneDX generator
///
/// The generator is invoked as `<command> <args...> <manifest>`. Standard
/// error is passed through to the terminal; standard output must be a
/// CycloneDX JSON document. No timeout is applied: a generator that never
/// exits stalls the manifest it was started for.
#[derive(Debug, Clone)]
pub struct CycloneDxNpmGenerator {
    command: String,
    args: Vec<String>,
    max_output_bytes: usize,
}

impl CycloneDxNpmGenerator {
    pub fn new(command: String, args: Vec<String>, max_output_bytes: usize) -> Self {
        Self {
            command,
            args,
            max_output_bytes,
        }
    }

    /// Captures the generator's stdout, failing on spawn errors, oversized
    /// output, or an unsuccessful exit status
    async fn run(&self, manifest: &Path) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(manifest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SbomError::GeneratorSpawn {
                command: self.command.clone(),
                manifest: manifest.to_path_buf(),
                details: e.to_string(),
            })?;

        let stdout = child
            .stdout
            .take()
            .context("SBOM generator stdout was not captured")?;

        // Read one byte past the ceiling so "exactly at the limit" still passes
        let mut output = Vec::new();
        stdout
            .take(self.max_output_bytes as u64 + 1)
            .read_to_end(&mut output)
            .await
            .with_context(|| {
                format!(
                    "Failed to read SBOM generator output for {}",
                    manifest.display()
                )
            })?;

        if output.len() > self.max_output_bytes {
            let _ = child.kill().await;
            return Err(SbomError::GeneratorOutputTooLarge {
                manifest: manifest.to_path_buf(),
                limit: self.max_output_bytes,
            }
            .into());
        }

        let status = child.wait().await.with_context(|| {
            format!(
                "Failed to wait for SBOM generator on {}",
                manifest.display()
            )
        })?;

        if !status.success() {
            return Err(SbomError::GeneratorExit {
                manifest: manifest.to_path_buf(),
                status: status.to_string(),
            }
            .into());
        }

        Ok(output)
    }
}

impl Default for CycloneDxNpmGenerator {
    fn default() -> Self {
        Self::new(
            DEFAULT_GENERATOR_COMMAND.to_string(),
            DEFAULT_GENERATOR_ARGS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_MAX_OUTPUT_BYTES,
        )
    }
}

#[async_trait]
impl BomGenerator for CycloneDxNpmGenerator {
    async fn generate(&self, manifest: &Path) -> Result<Vec<ComponentRecord>> {
        let output = self.run(manifest).await?;

        let document: BomDocument =
            serde_json::from_slice(&output).map_err(|e| SbomError::BomParseError {
                manifest: manifest.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(document.into_records())
    }

    fn describe_command(&self, manifest: &Path) -> String {
        let mut parts = vec![self.command.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(manifest.display().to_string());
        parts.join(" ")
    }
}
