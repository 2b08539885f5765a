/// Plain-text report formatters
mod component_list_formatter;
mod unique_license_formatter;

pub use component_list_formatter::{
    ComponentListFormatter, FULL_LIST_TITLE, UNDEFINED_LIST_TITLE,
};
pub use unique_license_formatter::UniqueLicenseFormatter;
