use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Instagram,
    TikTok,
    YouTube,
    LinkedIn,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::LinkedIn,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().to_lowercase() == needle)
            .ok_or_else(|| CoreError::UnknownPlatform(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Fashion,
    Entertainment,
    Food,
    Travel,
    Fitness,
    Beauty,
    Business,
    Education,
}

impl Industry {
    pub const ALL: [Industry; 9] = [
        Industry::Technology,
        Industry::Fashion,
        Industry::Entertainment,
        Industry::Food,
        Industry::Travel,
        Industry::Fitness,
        Industry::Beauty,
        Industry::Business,
        Industry::Education,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Fashion => "Fashion",
            Industry::Entertainment => "Entertainment",
            Industry::Food => "Food",
            Industry::Travel => "Travel",
            Industry::Fitness => "Fitness",
            Industry::Beauty => "Beauty",
            Industry::Business => "Business",
            Industry::Education => "Education",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Industry::ALL
            .into_iter()
            .find(|i| i.as_str().to_lowercase() == needle)
            .ok_or_else(|| CoreError::UnknownIndustry(s.to_string()))
    }
}

/// One generated (or ingested) trend event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub date: NaiveDate,
    pub platform: Platform,
    pub trend: String,
    /// Distinct topic label. When no record carries one, topic ranking
    /// groups by `trend` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Hashtags in the order they appeared. Generated records carry exactly one.
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub industry: Industry,
    pub engagement: u64,
    /// Percentage growth metric attached at generation time.
    pub growth_rate: f64,
    /// Free text used for sentiment scoring. `None` means the source had no
    /// content at all, which is different from an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl TrendRecord {
    /// The topic label if present, otherwise the trend name.
    #[must_use]
    pub fn topic_or_trend(&self) -> &str {
        self.topic.as_deref().unwrap_or(&self.trend)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SentimentLabel::ALL
            .into_iter()
            .find(|l| l.as_str().to_lowercase() == needle)
            .ok_or_else(|| CoreError::UnknownSentiment(s.to_string()))
    }
}

/// Engagement totals for one grouping key (hashtag, topic or trend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMetric {
    pub key: String,
    pub total_engagement: u64,
    pub mean_growth_rate: f64,
    pub count: usize,
}

/// One projected day for one trend, carrying the historical anchor it was
/// extrapolated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub trend: String,
    pub anchor_date: NaiveDate,
    pub anchor_volume: f64,
    pub forecast_date: NaiveDate,
    pub forecast_volume: u64,
    pub growth_forecast_pct: f64,
    pub industry: Industry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    #[serde(rename = "Content Strategy")]
    ContentStrategy,
    #[serde(rename = "Engagement Opportunities")]
    EngagementOpportunities,
    #[serde(rename = "Platform-Specific")]
    PlatformSpecific,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 3] = [
        RecommendationCategory::ContentStrategy,
        RecommendationCategory::EngagementOpportunities,
        RecommendationCategory::PlatformSpecific,
    ];
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationCategory::ContentStrategy => write!(f, "Content Strategy"),
            RecommendationCategory::EngagementOpportunities => {
                write!(f, "Engagement Opportunities")
            }
            RecommendationCategory::PlatformSpecific => write!(f, "Platform-Specific"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMetrics {
    /// 0 to 10.
    pub relevance: u8,
    pub potential_reach: u64,
    /// 0 to 10.
    pub effort: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub action_steps: Vec<String>,
    pub metrics: RecommendationMetrics,
}
