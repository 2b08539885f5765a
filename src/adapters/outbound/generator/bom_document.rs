//! CycloneDX JSON document shape, as far as the collector reads it
//!
//! Only `components` is required. Everything else the generator emits
//! (metadata, dependencies, serial number, ...) is ignored.

use crate::sbom_generation::domain::ComponentRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BomDocument {
    pub components: Vec<BomComponent>,
}

#[derive(Debug, Deserialize)]
pub struct BomComponent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "bom-ref", default)]
    pub bom_ref: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub licenses: Option<Vec<BomLicenseChoice>>,
}

/// One entry of a component's `licenses` array
///
/// CycloneDX allows either `{"license": {...}}` or `{"expression": "..."}`.
#[derive(Debug, Deserialize)]
pub struct BomLicenseChoice {
    #[serde(default)]
    pub license: Option<BomLicense>,
    #[serde(default)]
    pub expression: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BomLicense {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl BomLicenseChoice {
    /// Identifier to report for this entry: `license.id`, then `license.name`,
    /// then `expression`
    fn identifier(self) -> Option<String> {
        let BomLicenseChoice {
            license,
            expression,
        } = self;
        license
            .and_then(|l| l.id.or(l.name))
            .or(expression)
            .filter(|id| !id.trim().is_empty())
    }
}

impl From<BomComponent> for ComponentRecord {
    fn from(component: BomComponent) -> Self {
        let licenses = component.licenses.map(|choices| {
            choices
                .into_iter()
                .filter_map(BomLicenseChoice::identifier)
                .collect::<Vec<_>>()
        });

        ComponentRecord::new(
            component.name,
            component.group,
            component.version,
            component.bom_ref,
            component.author,
            licenses,
        )
    }
}

impl BomDocument {
    /// Projects every component into a flat record, keeping document order
    pub fn into_records(self) -> Vec<ComponentRecord> {
        self.components
            .into_iter()
            .map(ComponentRecord::from)
            .collect()
    }
}
