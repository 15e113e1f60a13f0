//! Record generation, aggregation, forecasting and recommendations for the
//! trendscope pipeline.

pub mod aggregator;
pub mod error;
pub mod forecast;
pub mod generator;
pub mod history;
pub mod pipeline;
pub mod recommend;
pub mod score;
pub mod velocity;

pub use aggregator::{
    aggregate_timeline, hashtag_frequencies, industry_counts, rank_hashtags, rank_topics,
    rank_trends, TimelinePoint,
};
pub use error::AnalyticsError;
pub use forecast::{forecast_trends, ForecastConfig};
pub use generator::{extract_hashtags, generate_records, PlatformSelection};
pub use history::{historical_series, related_trends, HistoryPoint};
pub use pipeline::{run_pipeline, PipelineConfig, TrendReport};
pub use recommend::{custom_recommendations, generate_recommendations, RecommendationSet};
pub use score::{trend_scores, ScoredRecord};
pub use velocity::{trend_velocity, TrendVelocity};
