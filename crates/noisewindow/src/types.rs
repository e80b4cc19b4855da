/// Shared state for the API server
use crate::config::AppConfig;
use crate::store::SettingsStore;

/// State shared by all endpoints.
pub struct AppState {
    /// Persistent settings (schedule, name, language)
    pub store: SettingsStore,
    /// Startup configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = SettingsStore::new(&config.storage_path);
        Self { store, config }
    }
}
