mod cli;
mod config;

use cli::Args;
use config::Settings;
use sbom_collect::adapters::outbound::console::StderrProgressReporter;
use sbom_collect::adapters::outbound::filesystem::{FileSystemWalker, FileSystemWriter};
use sbom_collect::adapters::outbound::generator::CycloneDxNpmGenerator;
use sbom_collect::adapters::outbound::licenses::BundledLicenseRepository;
use sbom_collect::application::dto::ScanRequest;
use sbom_collect::application::use_cases::{CollectComponentsUseCase, PublishReportsUseCase};
use sbom_collect::ports::outbound::{LicenseTextRepository, ProgressReporter};
use sbom_collect::shared::error::{ExitCode, SbomError};
use sbom_collect::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version arrive here too, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    // Validate the scan root and resolve it through any symlinks
    let root = validate_project_path(Path::new(&args.path))?;

    // Explicit config must exist; otherwise look for one in the scan root
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(&root)?,
    };
    let settings = Settings::resolve(&args, root, config_file);

    let progress_reporter = StderrProgressReporter::new();

    // License texts are needed only at the end, but a bad dataset should fail
    // before any generator runs
    let license_repository = match settings.license_dataset.clone() {
        Some(path) => BundledLicenseRepository::with_dataset(path),
        None => BundledLicenseRepository::new(),
    };
    let catalog = license_repository.load_catalog()?;

    let request = ScanRequest::builder()
        .root(settings.root.clone())
        .manifest_name(settings.manifest_name.clone())
        .exclude_dirs(settings.exclude_dirs.clone())
        .max_concurrent_generators(settings.max_concurrent_generators)
        .build()?;

    // Create adapters (Dependency Injection)
    let bom_generator = CycloneDxNpmGenerator::new(
        settings.generator_command.clone(),
        settings.generator_args.clone(),
        settings.max_output_bytes,
    );

    let collect = CollectComponentsUseCase::new(
        FileSystemWalker::new(),
        bom_generator,
        &progress_reporter,
    );
    let response = collect.execute(request).await?;

    let publish = PublishReportsUseCase::new(
        FileSystemWriter::new(settings.output_dir.clone()),
        &progress_reporter,
    );
    publish.execute(&response.components, &catalog)?;

    progress_reporter.report_completion(&format!(
        "🎉 {} manifest(s) processed, {} failed, {} component(s) collected",
        response.manifests_found,
        response.failed_manifests.len(),
        response.components.len()
    ));

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // A linked root is walked as its target; links below it are not followed
    let canonical = path
        .canonicalize()
        .map_err(|e| SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to resolve path: {}", e),
        })?;

    if !canonical.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(canonical)
}
