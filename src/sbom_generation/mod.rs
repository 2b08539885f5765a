/// Domain layer - pure business logic for collected SBOM components
///
/// Nothing in here performs I/O; adapters feed it records and read results.
pub mod domain;
pub mod services;
