use clap::Parser;

/// Collect CycloneDX SBOMs for every package.json in a directory tree
#[derive(Parser, Debug)]
#[command(name = "sbom-collect")]
#[command(version)]
#[command(
    about = "Collect CycloneDX SBOMs for every package.json in a directory tree",
    long_about = "Walks PATH for package.json files (skipping node_modules and bruno), runs \
                  the CycloneDX npm generator on each, and writes sbom.txt, \
                  unique-licenses.txt and undef-license.txt."
)]
pub struct Args {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub path: String,

    /// Configuration file (defaults to sbom-collect.config.yml in PATH, which
    /// may not set generator, output_dir or license_dataset)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Directory the reports are written to (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Additional directory names to skip while walking
    /// Can be specified multiple times: -e dist -e .cache
    #[arg(short, long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Maximum number of generator processes running at once
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

impl Args {
    /// Parses the process arguments, leaving exit handling to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
