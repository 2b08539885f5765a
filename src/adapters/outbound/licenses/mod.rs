/// License-text dataset adapters
mod bundled_catalog;

pub use bundled_catalog::BundledLicenseRepository;
