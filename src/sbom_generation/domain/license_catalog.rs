use std::collections::HashMap;

/// LicenseCatalog value object mapping a license identifier to its full text
///
/// Built once from the license dataset and read-only afterwards. When the
/// dataset lists an identifier twice, the later entry wins.
#[derive(Debug, Clone, Default)]
pub struct LicenseCatalog {
    texts: HashMap<String, String>,
}

impl LicenseCatalog {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            texts: entries.into_iter().collect(),
        }
    }

    /// Full license text for an exact identifier match
    pub fn text_for(&self, license_id: &str) -> Option<&str> {
        self.texts.get(license_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
