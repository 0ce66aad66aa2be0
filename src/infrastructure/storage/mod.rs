mod cos_store;
mod error_mapping;
mod local_store;
mod store_factory;

use object_store::path::Path as StorePath;

use crate::application::ports::StorageError;

pub use cos_store::{CosObjectStorage, DEFAULT_ENDPOINT_TEMPLATE};
pub use local_store::LocalObjectStorage;
pub use store_factory::ObjectStorageFactory;

/// Keys are addressed verbatim. A key the store would have to rewrite
/// (empty segments, leading `/`, `.` segments) names no reachable object.
fn object_path(key: &str) -> Result<StorePath, StorageError> {
    match StorePath::parse(key) {
        Ok(path) if path.as_ref() == key => Ok(path),
        _ => Err(StorageError::NotFound(format!(
            "{key} (key is not addressable verbatim)"
        ))),
    }
}
