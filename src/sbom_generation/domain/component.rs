/// ComponentRecord value object: one dependency reported by the SBOM generator
///
/// Records are created once during extraction and never mutated. The same
/// logical dependency found under several manifests yields several records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    name: String,
    group: Option<String>,
    version: String,
    bom_ref: String,
    author: Option<String>,
    licenses: Option<Vec<String>>,
}

impl ComponentRecord {
    /// Creates a new record.
    ///
    /// An empty license list is normalized to `None` so that "no license
    /// metadata" has exactly one representation.
    pub fn new(
        name: String,
        group: Option<String>,
        version: String,
        bom_ref: String,
        author: Option<String>,
        licenses: Option<Vec<String>>,
    ) -> Self {
        Self {
            name,
            group,
            version,
            bom_ref,
            author,
            licenses: licenses.filter(|l| !l.is_empty()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn bom_ref(&self) -> &str {
        &self.bom_ref
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn licenses(&self) -> Option<&[String]> {
        self.licenses.as_deref()
    }

    /// True when the generator reported no usable license information
    pub fn has_licenses(&self) -> bool {
        self.licenses.is_some()
    }
}
