//! End-to-end run over one filtered record set.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use trendscope_core::{AggregatedMetric, ForecastPoint, RecordFilter, SentimentLabel, TrendRecord};
use trendscope_sentiment::{
    classify_sentiment, sentiment_by_industry, sentiment_distribution, sentiment_keywords,
    IndustrySentiment, SentimentShare, TextScorer,
};

use crate::aggregator::{aggregate_timeline, rank_hashtags, rank_topics, TimelinePoint};
use crate::error::AnalyticsError;
use crate::forecast::{forecast_trends, ForecastConfig};
use crate::recommend::{generate_recommendations, RecommendationSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub forecast: ForecastConfig,
}

/// Every stage's output for one filtered record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub record_count: usize,
    /// `None` when no record carries a hashtag.
    pub hashtags: Option<Vec<AggregatedMetric>>,
    pub topics: Vec<AggregatedMetric>,
    pub timeline: Vec<TimelinePoint>,
    pub sentiment: Vec<SentimentShare>,
    pub sentiment_by_industry: Vec<IndustrySentiment>,
    pub keywords: BTreeMap<SentimentLabel, Vec<String>>,
    pub forecast: Vec<ForecastPoint>,
    pub recommendations: RecommendationSet,
}

/// Filter `records`, then run aggregation, sentiment, forecasting and
/// recommendations over what is left.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] when nothing survives the filter, and
/// [`AnalyticsError::InvalidArgument`] for an invalid forecast config.
pub fn run_pipeline<S, R>(
    records: &[TrendRecord],
    filter: &RecordFilter,
    config: &PipelineConfig,
    scorer: &S,
    rng: &mut R,
) -> Result<TrendReport, AnalyticsError>
where
    S: TextScorer + ?Sized,
    R: Rng,
{
    let filtered = filter.apply(records);
    if filtered.is_empty() {
        tracing::info!(input = records.len(), "no records left after filtering");
        return Err(AnalyticsError::no_data(format!(
            "no records match the filter ({} before filtering)",
            records.len()
        )));
    }

    let hashtags = match rank_hashtags(&filtered) {
        Ok(ranked) => Some(ranked),
        Err(AnalyticsError::MissingField { field }) => {
            tracing::warn!(field, "skipping hashtag ranking");
            None
        }
        Err(e) => return Err(e),
    };
    let topics = rank_topics(&filtered)?;
    let timeline = aggregate_timeline(&filtered)?;

    let classified = classify_sentiment(&filtered, scorer, rng);
    let sentiment = sentiment_distribution(&classified)?;
    let by_industry = sentiment_by_industry(&classified)?;
    let keywords = sentiment_keywords(&classified);

    let forecast = forecast_trends(&filtered, &config.forecast, rng)?;
    let recommendations = generate_recommendations(&filtered)?;

    tracing::info!(
        records = filtered.len(),
        topics = topics.len(),
        forecast_points = forecast.len(),
        "pipeline complete"
    );

    Ok(TrendReport {
        record_count: filtered.len(),
        hashtags,
        topics,
        timeline,
        sentiment,
        sentiment_by_industry: by_industry,
        keywords,
        forecast,
        recommendations,
    })
}
