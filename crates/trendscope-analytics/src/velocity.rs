//! Day-over-day change in record volume per trend.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trendscope_core::TrendRecord;

use crate::error::AnalyticsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendVelocity {
    pub trend: String,
    pub date: NaiveDate,
    pub daily_count: usize,
    /// Percentage change from the trend's previous observed date; 0 on the
    /// first date.
    pub velocity: f64,
}

/// Daily record counts per trend with percentage change between consecutive
/// observed dates. Ordered by trend, then date.
///
/// Dates on which a trend has no records are skipped, so the change is
/// measured against the last date that had any.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection.
#[allow(clippy::cast_precision_loss)]
pub fn trend_velocity(records: &[TrendRecord]) -> Result<Vec<TrendVelocity>, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::no_data("trend velocity: no records"));
    }

    let mut counts: BTreeMap<(&str, NaiveDate), usize> = BTreeMap::new();
    for r in records {
        *counts.entry((r.trend.as_str(), r.date)).or_insert(0) += 1;
    }

    let mut out: Vec<TrendVelocity> = Vec::with_capacity(counts.len());
    let mut previous: Option<(&str, usize)> = None;
    for ((trend, date), daily_count) in counts {
        let velocity = match previous {
            Some((prev_trend, prev_count)) if prev_trend == trend => {
                (daily_count as f64 - prev_count as f64) / prev_count as f64 * 100.0
            }
            _ => 0.0,
        };
        previous = Some((trend, daily_count));
        out.push(TrendVelocity {
            trend: trend.to_string(),
            date,
            daily_count,
            velocity,
        });
    }

    Ok(out)
}
