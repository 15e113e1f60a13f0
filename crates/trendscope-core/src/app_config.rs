use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Day count used by record generation when the caller does not pass one.
    pub default_days: u32,
    /// Fixed RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub forecast_horizon_days: u32,
    /// Half-width of the uniform forecast multiplier, in `[0, 1)`.
    pub forecast_jitter: f64,
    /// Optional YAML vocabulary file; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            default_days: 7,
            seed: None,
            forecast_horizon_days: 7,
            forecast_jitter: 0.1,
            catalog_path: None,
        }
    }
}
