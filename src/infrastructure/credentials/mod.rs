mod env_credentials;
mod static_credentials;

pub use env_credentials::{DEFAULT_SECRET_ID_VAR, DEFAULT_SECRET_KEY_VAR, EnvCredentialSource};
pub use static_credentials::StaticCredentialSource;
