use crate::ports::outbound::ReportFormatter;
use crate::sbom_generation::domain::{ComponentRecord, LicenseCatalog};
use crate::sbom_generation::services::LicenseAnalyzer;

/// Separator between the identifier index and each license text
const SECTION_SEPARATOR: &str = "================================================";

/// UniqueLicenseFormatter adapter rendering the license reference report
///
/// Layout: a bulleted index of every distinct identifier, then the full text
/// of each identifier the catalog knows. Identifiers without text stay in
/// the index but get no body.
pub struct UniqueLicenseFormatter<'a> {
    catalog: &'a LicenseCatalog,
}

impl<'a> UniqueLicenseFormatter<'a> {
    pub fn new(catalog: &'a LicenseCatalog) -> Self {
        Self { catalog }
    }

    /// Identifiers present in `components` that have no text in the catalog
    pub fn missing_texts(&self, components: &[ComponentRecord]) -> Vec<String> {
        LicenseAnalyzer::unique_licenses(components)
            .into_iter()
            .filter(|id| self.catalog.text_for(id).is_none())
            .collect()
    }
}

impl ReportFormatter for UniqueLicenseFormatter<'_> {
    fn format(&self, components: &[ComponentRecord]) -> String {
        let licenses = LicenseAnalyzer::unique_licenses(components);
        let mut output = String::new();

        for license in &licenses {
            output.push_str(&format!("- {}\n", license));
        }
        output.push_str(SECTION_SEPARATOR);
        output.push_str("\n\n");

        for license in &licenses {
            if let Some(text) = self.catalog.text_for(license) {
                output.push_str(&format!(
                    "{}\n\n{}\n\n{}\n\n",
                    license, text, SECTION_SEPARATOR
                ));
            }
        }

        output
    }
}
