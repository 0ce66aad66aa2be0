mod counter_store;
mod credential_source;
mod document_extractor;
mod object_storage;
mod repository_error;

pub use counter_store::CounterStore;
pub use credential_source::CredentialSource;
pub use document_extractor::{DocumentExtractor, ExtractionError};
pub use object_storage::{ObjectStorage, StorageError};
pub use repository_error::RepositoryError;
