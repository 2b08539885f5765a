use crate::ports::outbound::ReportFormatter;
use crate::sbom_generation::domain::ComponentRecord;

/// Separator line closing the header and every component block
const BLOCK_SEPARATOR: &str = "======================================================";

/// Rendered in place of an absent group or author
const NOT_AVAILABLE: &str = "N/A";

/// Rendered when a component carries no license metadata
const NO_LICENSES: &str = "No licenses found";

/// Header of the full dependency list
pub const FULL_LIST_TITLE: &str = "OSS LIST";

/// Header of the list of packages missing license metadata
pub const UNDEFINED_LIST_TITLE: &str = "UNDEF PACKAGES LIST";

/// ComponentListFormatter adapter rendering one labelled block per component
///
/// Used for both the full dependency list and the undefined-license list;
/// only the title differs.
pub struct ComponentListFormatter {
    title: String,
}

impl ComponentListFormatter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Formatter for `sbom.txt`
    pub fn full_list() -> Self {
        Self::new(FULL_LIST_TITLE)
    }

    /// Formatter for `undef-license.txt`
    pub fn undefined_licenses() -> Self {
        Self::new(UNDEFINED_LIST_TITLE)
    }

    fn render_component(output: &mut String, component: &ComponentRecord) {
        let licenses = component
            .licenses()
            .map(|l| l.join(","))
            .unwrap_or_else(|| NO_LICENSES.to_string());

        output.push_str(&format!("Name: {}\n", component.name()));
        output.push_str(&format!(
            "Group: {}\n",
            component.group().unwrap_or(NOT_AVAILABLE)
        ));
        output.push_str(&format!("Version: {}\n", component.version()));
        output.push_str(&format!("BOM-Ref: {}\n", component.bom_ref()));
        output.push_str(&format!(
            "Author: {}\n",
            component.author().unwrap_or(NOT_AVAILABLE)
        ));
        output.push_str(&format!("Licenses: {}\n", licenses));
        output.push_str(BLOCK_SEPARATOR);
        output.push('\n');
    }
}

impl ReportFormatter for ComponentListFormatter {
    fn format(&self, components: &[ComponentRecord]) -> String {
        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');
        output.push_str(BLOCK_SEPARATOR);
        output.push('\n');

        for component in components {
            Self::render_component(&mut output, component);
        }

        output
    }
}
