use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; defaults match [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("TRENDSCOPE_ENV", "development"));
    let log_level = or_default("TRENDSCOPE_LOG_LEVEL", "info");
    let default_days = parse_u32("TRENDSCOPE_DAYS", "7")?;

    let seed = match lookup("TRENDSCOPE_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("TRENDSCOPE_SEED", e.to_string()))?,
        ),
        Err(_) => None,
    };

    let forecast_horizon_days = parse_u32("TRENDSCOPE_FORECAST_HORIZON_DAYS", "7")?;
    if forecast_horizon_days == 0 {
        return Err(invalid(
            "TRENDSCOPE_FORECAST_HORIZON_DAYS",
            "must be at least 1".to_string(),
        ));
    }

    let forecast_jitter = or_default("TRENDSCOPE_FORECAST_JITTER", "0.1")
        .parse::<f64>()
        .map_err(|e| invalid("TRENDSCOPE_FORECAST_JITTER", e.to_string()))?;
    if !(0.0..1.0).contains(&forecast_jitter) {
        return Err(invalid(
            "TRENDSCOPE_FORECAST_JITTER",
            format!("{forecast_jitter} is outside [0, 1)"),
        ));
    }

    let catalog_path = lookup("TRENDSCOPE_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        default_days,
        seed,
        forecast_horizon_days,
        forecast_jitter,
        catalog_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
