//! Grouping and ranking of trend records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trendscope_core::{AggregatedMetric, Industry, Platform, TrendRecord};

use crate::error::AnalyticsError;
use crate::generator::extract_hashtags;

/// Record count for one (date, platform) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub platform: Platform,
    pub volume: usize,
}

#[derive(Debug, Default)]
struct Accumulator {
    engagement: u64,
    growth_sum: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, record: &TrendRecord) {
        self.engagement = self.engagement.saturating_add(record.engagement);
        self.growth_sum += record.growth_rate;
        self.count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self, key: String) -> AggregatedMetric {
        AggregatedMetric {
            key,
            total_engagement: self.engagement,
            mean_growth_rate: self.growth_sum / self.count as f64,
            count: self.count,
        }
    }
}

fn ensure_records(records: &[TrendRecord], what: &str) -> Result<(), AnalyticsError> {
    if records.is_empty() {
        Err(AnalyticsError::no_data(format!("{what}: no records")))
    } else {
        Ok(())
    }
}

/// Hashtags a record contributes to: its own list, or tags found in its
/// content when the list is empty. Duplicates within a record count once.
pub(crate) fn record_hashtags(record: &TrendRecord) -> Vec<String> {
    if record.hashtags.is_empty() {
        return record
            .content
            .as_deref()
            .map(extract_hashtags)
            .unwrap_or_default();
    }
    let mut tags: Vec<String> = Vec::with_capacity(record.hashtags.len());
    for tag in &record.hashtags {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Group by hashtag and rank by total engagement, highest first.
///
/// A record listing several hashtags contributes its full engagement to each
/// of them. Ties are ordered by hashtag.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection and
/// [`AnalyticsError::MissingField`] when no record carries a hashtag.
pub fn rank_hashtags(records: &[TrendRecord]) -> Result<Vec<AggregatedMetric>, AnalyticsError> {
    ensure_records(records, "hashtag ranking")?;

    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
    for record in records {
        for tag in record_hashtags(record) {
            groups.entry(tag).or_default().add(record);
        }
    }
    if groups.is_empty() {
        return Err(AnalyticsError::MissingField { field: "hashtags" });
    }

    let mut ranked: Vec<AggregatedMetric> =
        groups.into_iter().map(|(k, acc)| acc.finish(k)).collect();
    sort_by_engagement(&mut ranked);
    Ok(ranked)
}

/// Group by topic (falling back to the trend name per record) and rank by
/// record count, then engagement.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection.
pub fn rank_topics(records: &[TrendRecord]) -> Result<Vec<AggregatedMetric>, AnalyticsError> {
    ensure_records(records, "topic ranking")?;

    let mut ranked = group_by(records, |r| r.topic_or_trend().to_string());
    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.total_engagement.cmp(&a.total_engagement))
            .then_with(|| a.key.cmp(&b.key))
    });
    Ok(ranked)
}

/// Group by trend name and rank by total engagement.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection.
pub fn rank_trends(records: &[TrendRecord]) -> Result<Vec<AggregatedMetric>, AnalyticsError> {
    ensure_records(records, "trend ranking")?;

    let mut ranked = group_by(records, |r| r.trend.clone());
    sort_by_engagement(&mut ranked);
    Ok(ranked)
}

/// Record volume per (date, platform), ordered by date then platform.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection.
pub fn aggregate_timeline(records: &[TrendRecord]) -> Result<Vec<TimelinePoint>, AnalyticsError> {
    ensure_records(records, "timeline")?;

    let mut cells: BTreeMap<(NaiveDate, Platform), usize> = BTreeMap::new();
    for r in records {
        *cells.entry((r.date, r.platform)).or_insert(0) += 1;
    }

    Ok(cells
        .into_iter()
        .map(|((date, platform), volume)| TimelinePoint {
            date,
            platform,
            volume,
        })
        .collect())
}

/// Records per industry, most frequent first.
#[must_use]
pub fn industry_counts(records: &[TrendRecord]) -> Vec<(Industry, usize)> {
    let mut counts: BTreeMap<Industry, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.industry).or_insert(0) += 1;
    }
    let mut ranked: Vec<(Industry, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// Occurrences of each hashtag, most frequent first.
#[must_use]
pub fn hashtag_frequencies(records: &[TrendRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for r in records {
        for tag in record_hashtags(r) {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

fn sort_by_engagement(metrics: &mut [AggregatedMetric]) {
    metrics.sort_by(|a, b| {
        b.total_engagement
            .cmp(&a.total_engagement)
            .then_with(|| a.key.cmp(&b.key))
    });
}

fn group_by<F>(records: &[TrendRecord], key: F) -> Vec<AggregatedMetric>
where
    F: Fn(&TrendRecord) -> String,
{
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
    for r in records {
        groups.entry(key(r)).or_default().add(r);
    }
    groups.into_iter().map(|(k, acc)| acc.finish(k)).collect()
}
