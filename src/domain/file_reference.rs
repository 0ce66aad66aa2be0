use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub const FILE_REFERENCE_SCHEME: &str = "cloud://";

const SUPPORTED_EXTENSION: &str = ".pdf";

static REFERENCE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<environment>[^.]+)\.(?P<bucket>[^/]+)/(?P<object_key>.+)$")
        .expect("reference pattern is valid")
});

/// Opaque `cloud://environment.bucket/objectPath` identifier handed in by clients.
pub struct FileReference;

impl FileReference {
    /// Decomposes a raw reference into its storage location.
    ///
    /// The object key is returned byte for byte as it appears in the input.
    pub fn parse(raw: &str) -> Result<ResolvedLocation, ValidationError> {
        let body = raw
            .strip_prefix(FILE_REFERENCE_SCHEME)
            .ok_or(ValidationError::MissingScheme)?;

        let captures = REFERENCE_BODY
            .captures(body)
            .ok_or(ValidationError::MalformedReference)?;

        let object_key = &captures["object_key"];
        if !object_key.to_lowercase().ends_with(SUPPORTED_EXTENSION) {
            return Err(ValidationError::UnsupportedFileType);
        }

        Ok(ResolvedLocation {
            environment: captures["environment"].to_string(),
            bucket: captures["bucket"].to_string(),
            object_key: object_key.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub environment: String,
    pub bucket: String,
    pub object_key: String,
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.object_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("file reference must start with cloud://")]
    MissingScheme,
    #[error("file reference is not of the form environment.bucket/path")]
    MalformedReference,
    #[error("file reference does not point to a PDF document")]
    UnsupportedFileType,
}
