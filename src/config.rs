//! Configuration file support for sbom-collect.
//!
//! Provides YAML-based configuration through `sbom-collect.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! command-line flags over file values over built-in defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use sbom_collect::adapters::outbound::generator::{
    DEFAULT_GENERATOR_ARGS, DEFAULT_GENERATOR_COMMAND, DEFAULT_MAX_OUTPUT_BYTES,
};
use sbom_collect::application::dto::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_MANIFEST_NAME, DEFAULT_MAX_CONCURRENT_GENERATORS,
};
use sbom_collect::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-collect.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub manifest_name: Option<String>,
    pub exclude_dirs: Option<Vec<String>>,
    pub generator: Option<GeneratorConfig>,
    pub max_output_bytes: Option<usize>,
    pub max_concurrent_generators: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub license_dataset: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// External SBOM generator invocation. The manifest path is always appended
/// after `args`.
#[derive(Debug, Deserialize, Default)]
pub struct GeneratorConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub manifest_name: String,
    pub exclude_dirs: Vec<String>,
    pub generator_command: String,
    pub generator_args: Vec<String>,
    pub max_output_bytes: usize,
    pub max_concurrent_generators: usize,
    pub license_dataset: Option<PathBuf>,
}

impl Settings {
    /// Merges CLI flags, then config values, then defaults.
    ///
    /// `root` is the already validated scan root. `--exclude-dir` values are
    /// appended to the configured (or default) list rather than replacing it.
    pub fn resolve(args: &Args, root: PathBuf, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        let generator = config.generator.unwrap_or_default();

        let mut exclude_dirs = config.exclude_dirs.unwrap_or_else(|| {
            DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
        });
        for dir in &args.exclude_dirs {
            if !exclude_dirs.contains(dir) {
                exclude_dirs.push(dir.clone());
            }
        }

        Self {
            root,
            output_dir: args
                .output_dir
                .as_ref()
                .map(PathBuf::from)
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            manifest_name: config
                .manifest_name
                .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string()),
            exclude_dirs,
            generator_command: generator
                .command
                .unwrap_or_else(|| DEFAULT_GENERATOR_COMMAND.to_string()),
            generator_args: generator.args.unwrap_or_else(|| {
                DEFAULT_GENERATOR_ARGS.iter().map(|s| s.to_string()).collect()
            }),
            max_output_bytes: config.max_output_bytes.unwrap_or(DEFAULT_MAX_OUTPUT_BYTES),
            max_concurrent_generators: args
                .jobs
                .or(config.max_concurrent_generators)
                .unwrap_or(DEFAULT_MAX_CONCURRENT_GENERATORS),
            license_dataset: config.license_dataset,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// Relative `output_dir` and `license_dataset` values are resolved against the
/// directory holding the config file.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(base) = path.parent() {
        config.output_dir = config.output_dir.map(|p| base.join(p));
        config.license_dataset = config.license_dataset.map(|p| base.join(p));
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
///
/// A discovered file lives inside the tree being scanned, so it may only
/// tune the walk. `generator`, `output_dir` and `license_dataset` are dropped
/// with a warning; they are honoured from `--config` alone.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(strip_untrusted_fields(config, &config_path)))
}

/// Clears the fields that choose what runs or where files are read and written.
fn strip_untrusted_fields(mut config: ConfigFile, path: &Path) -> ConfigFile {
    let mut ignored = Vec::new();
    if config.generator.take().is_some() {
        ignored.push("generator");
    }
    if config.output_dir.take().is_some() {
        ignored.push("output_dir");
    }
    if config.license_dataset.take().is_some() {
        ignored.push("license_dataset");
    }

    for field in ignored {
        eprintln!(
            "⚠️  Warning: Config field '{}' in {} is only honoured from --config and will be ignored.",
            field,
            path.display()
        );
    }

    config
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref name) = config.manifest_name {
        if name.trim().is_empty() {
            bail!(
                "Invalid config: manifest_name must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default (\"package.json\")."
            );
        }
    }

    if let Some(ref dirs) = config.exclude_dirs {
        for (i, dir) in dirs.iter().enumerate() {
            if dir.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_dirs[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a directory base name (e.g., \"node_modules\").",
                    i
                );
            }
        }
    }

    if let Some(ref generator) = config.generator {
        if matches!(generator.command, Some(ref c) if c.trim().is_empty()) {
            bail!(
                "Invalid config: generator.command must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default (\"npx\")."
            );
        }
    }

    if config.max_output_bytes == Some(0) {
        bail!("Invalid config: max_output_bytes must be greater than 0.");
    }

    if config.max_concurrent_generators == Some(0) {
        bail!("Invalid config: max_concurrent_generators must be greater than 0.");
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
