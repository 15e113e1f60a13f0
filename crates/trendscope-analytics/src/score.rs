//! Composite 0-10 trend score per record.

use serde::{Deserialize, Serialize};
use trendscope_core::TrendRecord;

use crate::error::AnalyticsError;
use crate::generator::round1;

const ENGAGEMENT_WEIGHT: f64 = 0.4;
const GROWTH_WEIGHT: f64 = 0.4;
const RECENCY_WEIGHT: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: TrendRecord,
    /// Days between this record and the newest record in the collection.
    pub days_old: i64,
    pub trend_score: f64,
}

/// Score every record on engagement, growth and recency, relative to the
/// rest of the collection. Output keeps the input order.
///
/// `score = 10 * (0.4 * engagement / max_engagement
///              + 0.4 * min-max scaled growth
///              + 0.2 * (1 - days_old / max(max_days_old, 1)))`,
/// rounded to one decimal. Growth scales to 0.5 when every record shares
/// the same rate; engagement contributes 0 when every record has none.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection.
#[allow(clippy::cast_precision_loss)]
pub fn trend_scores(records: &[TrendRecord]) -> Result<Vec<ScoredRecord>, AnalyticsError> {
    let Some(latest) = records.iter().map(|r| r.date).max() else {
        return Err(AnalyticsError::no_data("trend scores: no records"));
    };

    let max_engagement = records.iter().map(|r| r.engagement).max().unwrap_or(0);
    let (min_growth, max_growth) = records.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), r| (lo.min(r.growth_rate), hi.max(r.growth_rate)),
    );
    let growth_span = max_growth - min_growth;
    let max_days_old = records
        .iter()
        .map(|r| (latest - r.date).num_days())
        .max()
        .unwrap_or(0)
        .max(1);

    Ok(records
        .iter()
        .map(|r| {
            let days_old = (latest - r.date).num_days();
            let norm_engagement = if max_engagement > 0 {
                r.engagement as f64 / max_engagement as f64
            } else {
                0.0
            };
            let norm_growth = if growth_span > 0.0 {
                (r.growth_rate - min_growth) / growth_span
            } else {
                0.5
            };
            let recency = 1.0 - days_old as f64 / max_days_old as f64;
            let score = 10.0
                * (ENGAGEMENT_WEIGHT * norm_engagement
                    + GROWTH_WEIGHT * norm_growth
                    + RECENCY_WEIGHT * recency);

            ScoredRecord {
                record: r.clone(),
                days_old,
                trend_score: round1(score),
            }
        })
        .collect())
}
