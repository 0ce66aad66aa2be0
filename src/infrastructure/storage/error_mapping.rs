use crate::application::ports::StorageError;

pub(super) fn classify(error: object_store::Error) -> StorageError {
    match error {
        object_store::Error::NotFound { path, .. } => StorageError::NotFound(path),
        object_store::Error::PermissionDenied { path, .. }
        | object_store::Error::Unauthenticated { path, .. } => StorageError::AccessDenied(path),
        other => StorageError::Transient(other.to_string()),
    }
}
