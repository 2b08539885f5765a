/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod scan_request;
mod scan_response;

pub use scan_request::{
    ScanRequest, ScanRequestBuilder, DEFAULT_EXCLUDE_DIRS, DEFAULT_MANIFEST_NAME,
    DEFAULT_MAX_CONCURRENT_GENERATORS,
};
pub use scan_response::ScanResponse;
