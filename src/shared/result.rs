/// Crate-wide result type.
///
/// Errors are `anyhow::Error`, usually wrapping an
/// [`SbomError`](crate::shared::error::SbomError) with added context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
