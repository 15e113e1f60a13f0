//! Sentiment labelling for trend records.
//!
//! Scores record content through a pluggable [`TextScorer`] (a VADER-style
//! [`LexiconScorer`] by default), maps compound scores onto
//! positive/neutral/negative labels and summarizes the labels as distribution
//! tables, per-industry breakdowns and per-label keyword lists.

pub mod classifier;
pub mod distribution;
pub mod error;
pub mod keywords;
pub mod scorer;
pub mod types;

pub use classifier::{classify_sentiment, label_for_compound};
pub use distribution::{sentiment_by_industry, sentiment_distribution};
pub use error::SentimentError;
pub use keywords::sentiment_keywords;
pub use scorer::{LexiconScorer, TextScorer};
pub use types::{ClassifiedRecord, IndustrySentiment, SentimentShare};
