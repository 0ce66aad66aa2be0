mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    CredentialSettings, DatabaseSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError, StorageProviderSetting, StorageSettings,
};
