use crate::application::ports::CredentialSource;
use crate::domain::Credentials;

pub const DEFAULT_SECRET_ID_VAR: &str = "TENCENTCLOUD_SECRETID";
pub const DEFAULT_SECRET_KEY_VAR: &str = "TENCENTCLOUD_SECRETKEY";

/// Reads the key pair from the process environment on every call, so
/// rotated or late-injected secrets are picked up without a restart.
pub struct EnvCredentialSource {
    secret_id_var: String,
    secret_key_var: String,
}

impl EnvCredentialSource {
    pub fn new(secret_id_var: impl Into<String>, secret_key_var: impl Into<String>) -> Self {
        Self {
            secret_id_var: secret_id_var.into(),
            secret_key_var: secret_key_var.into(),
        }
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_ID_VAR, DEFAULT_SECRET_KEY_VAR)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn load(&self) -> Option<Credentials> {
        let id = std::env::var(&self.secret_id_var).ok()?;
        let secret = std::env::var(&self.secret_key_var).ok()?;
        Some(Credentials::new(id, secret)).filter(Credentials::is_complete)
    }
}
