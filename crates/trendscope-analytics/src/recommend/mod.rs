//! Templated content recommendations derived from aggregate rankings.

mod content;
mod custom;
mod engagement;
mod platform;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trendscope_core::{Recommendation, RecommendationCategory, RecommendationMetrics, TrendRecord};

use crate::error::AnalyticsError;

pub use custom::custom_recommendations;

/// Recommendations grouped by category. Every category is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    categories: BTreeMap<RecommendationCategory, Vec<Recommendation>>,
}

impl RecommendationSet {
    #[must_use]
    pub fn get(&self, category: RecommendationCategory) -> &[Recommendation] {
        self.categories.get(&category).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecommendationCategory, &[Recommendation])> + '_ {
        self.categories.iter().map(|(c, recs)| (*c, recs.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the three recommendation categories from `records`.
///
/// Within a category recommendations are ordered by relevance, highest
/// first; equal relevance keeps template order.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection.
pub fn generate_recommendations(
    records: &[TrendRecord],
) -> Result<RecommendationSet, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::no_data("recommendations: no records"));
    }

    let mut categories = BTreeMap::new();
    for category in RecommendationCategory::ALL {
        let mut recs = match category {
            RecommendationCategory::ContentStrategy => content::recommendations(records)?,
            RecommendationCategory::EngagementOpportunities => {
                engagement::recommendations(records)
            }
            RecommendationCategory::PlatformSpecific => platform::recommendations(records),
        };
        rank(&mut recs);
        categories.insert(category, recs);
    }

    let set = RecommendationSet { categories };
    tracing::debug!(recommendations = set.len(), "recommendations generated");
    Ok(set)
}

pub(crate) fn rank(recs: &mut [Recommendation]) {
    recs.sort_by(|a, b| b.metrics.relevance.cmp(&a.metrics.relevance));
}

pub(crate) fn recommendation(
    title: impl Into<String>,
    description: impl Into<String>,
    action_steps: Vec<String>,
    (relevance, potential_reach, effort): (u8, u64, u8),
) -> Recommendation {
    Recommendation {
        title: title.into(),
        description: description.into(),
        action_steps,
        metrics: RecommendationMetrics {
            relevance,
            potential_reach,
            effort,
        },
    }
}

pub(crate) fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "recommend_test.rs"]
mod tests;
