use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Industry, Platform, TrendRecord};

/// Explicit dashboard filter state passed into each pipeline call.
///
/// Every field is optional; an empty filter keeps every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub platform: Option<Platform>,
    pub industry: Option<Industry>,
    /// Inclusive lower bound on `TrendRecord::date`.
    pub since: Option<NaiveDate>,
    /// Case-insensitive substring matched against trend, topic and hashtags.
    pub search: Option<String>,
}

impl RecordFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platform.is_none()
            && self.industry.is_none()
            && self.since.is_none()
            && self.search.as_deref().is_none_or(|s| s.trim().is_empty())
    }

    #[must_use]
    pub fn matches(&self, record: &TrendRecord) -> bool {
        if self.platform.is_some_and(|p| p != record.platform) {
            return false;
        }
        if self.industry.is_some_and(|i| i != record.industry) {
            return false;
        }
        if self.since.is_some_and(|d| record.date < d) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let needle = term.to_lowercase();
                let hit = |s: &str| s.to_lowercase().contains(&needle);
                hit(record.trend.as_str())
                    || record.topic.as_deref().is_some_and(hit)
                    || record.hashtags.iter().any(|h| hit(h.as_str()))
            }
            _ => true,
        }
    }

    /// Keep only the records that match.
    #[must_use]
    pub fn apply(&self, records: &[TrendRecord]) -> Vec<TrendRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
