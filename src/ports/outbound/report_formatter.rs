use crate::sbom_generation::domain::ComponentRecord;

/// ReportFormatter port for rendering the aggregate as a plain-text report
pub trait ReportFormatter {
    /// Renders the report body for `components`
    fn format(&self, components: &[ComponentRecord]) -> String;
}
