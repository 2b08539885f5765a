/// SBOM generator adapters (external CycloneDX tooling)
mod bom_document;
mod cyclonedx_npm;

pub use cyclonedx_npm::{
    CycloneDxNpmGenerator, DEFAULT_GENERATOR_ARGS, DEFAULT_GENERATOR_COMMAND,
    DEFAULT_MAX_OUTPUT_BYTES,
};
