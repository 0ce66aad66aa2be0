mod credentials;
mod extraction_result;
mod file_reference;

pub use credentials::Credentials;
pub use extraction_result::ExtractionResult;
pub use file_reference::{FILE_REFERENCE_SCHEME, FileReference, ResolvedLocation, ValidationError};
