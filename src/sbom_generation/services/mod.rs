mod license_analyzer;

pub use license_analyzer::LicenseAnalyzer;
