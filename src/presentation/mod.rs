pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings, StorageProviderSetting, StorageSettings};
pub use router::create_router;
pub use state::AppState;
