use serde::{Deserialize, Serialize};
use trendscope_core::{Industry, SentimentLabel, TrendRecord};

/// A trend record with its sentiment label attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: TrendRecord,
    pub sentiment: SentimentLabel,
    /// Compound score from the text scorer. `None` when the record had no
    /// content to score.
    pub compound: Option<f64>,
}

/// One row of a sentiment distribution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentShare {
    pub label: SentimentLabel,
    pub count: usize,
    /// Share of the total, rounded to one decimal place.
    pub percentage: f64,
}

/// One (industry, label) row of the per-industry breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustrySentiment {
    pub industry: Industry,
    pub label: SentimentLabel,
    pub count: usize,
    /// Share within the industry, rounded to one decimal place.
    pub percentage: f64,
}
