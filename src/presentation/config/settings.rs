use config::{Config, File};
use serde::Deserialize;

use crate::infrastructure::credentials::{DEFAULT_SECRET_ID_VAR, DEFAULT_SECRET_KEY_VAR};
use crate::infrastructure::storage::DEFAULT_ENDPOINT_TEMPLATE;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub credentials: CredentialSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub region: String,
    pub endpoint_template: String,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Cos,
    Local,
}

/// Names of the environment variables holding the storage key pair. The
/// values themselves are read per request and never stored in settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSettings {
    pub secret_id_var: String,
    pub secret_key_var: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>.toml` when present, and
    /// `APP__SECTION__KEY` environment overrides.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 80)?
            .set_default("storage.provider", "cos")?
            .set_default("storage.region", "ap-shanghai")?
            .set_default("storage.endpoint_template", DEFAULT_ENDPOINT_TEMPLATE)?
            .set_default("storage.local_path", "./data")?
            .set_default("credentials.secret_id_var", DEFAULT_SECRET_ID_VAR)?
            .set_default("credentials.secret_key_var", DEFAULT_SECRET_KEY_VAR)?
            .set_default("database.max_connections", 5)?
            .set_default("logging.level", "info")?
            .set_default("logging.json_format", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}
