use sbom_collect::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ReportWriter keeping reports in memory
#[derive(Default, Clone)]
pub struct MockReportWriter {
    files: Arc<Mutex<HashMap<String, String>>>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<String> {
        self.files.lock().unwrap().get(file_name).cloned()
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        self.files
            .lock()
            .unwrap()
            .insert(file_name.to_string(), content.to_string());
        Ok(PathBuf::from(file_name))
    }
}
