pub mod component;
pub mod license_catalog;

pub use component::ComponentRecord;
pub use license_catalog::LicenseCatalog;
