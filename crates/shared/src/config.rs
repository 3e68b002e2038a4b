//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend REST service configuration.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Console presentation defaults.
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Backend REST service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the procurement backend API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token attached to authenticated calls, when already issued.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

/// Console presentation defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Page size for request listings.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Departement preselected for budget commands.
    #[serde(default = "default_departement")]
    pub departement: String,
}

fn default_page_size() -> u32 {
    10
}

fn default_departement() -> String {
    "Maintenance General".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            departement: default_departement(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PROCURA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
