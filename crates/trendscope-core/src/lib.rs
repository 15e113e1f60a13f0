//! Shared domain types, vocabulary catalog, filters and configuration for
//! the trendscope pipeline.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod format;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, parse_catalog, IndustryCatalog, IndustryProfile};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::RecordFilter;
pub use format::format_compact;
pub use types::{
    AggregatedMetric, ForecastPoint, Industry, Platform, Recommendation, RecommendationCategory,
    RecommendationMetrics, SentimentLabel, TrendRecord,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("unknown sentiment label: {0}")]
    UnknownSentiment(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
