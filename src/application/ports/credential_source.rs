use crate::domain::Credentials;

/// Supplies storage credentials at request time.
pub trait CredentialSource: Send + Sync {
    /// Returns `None` when no usable key pair is configured.
    fn load(&self) -> Option<Credentials>;
}
