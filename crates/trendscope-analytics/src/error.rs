use thiserror::Error;
use trendscope_sentiment::SentimentError;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The input held zero records, usually after filtering.
    #[error("no data: {context}")]
    NoData { context: String },

    /// No record carried the field a grouping needs.
    #[error("missing field: no record carries {field}")]
    MissingField { field: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Sentiment(#[from] SentimentError),
}

impl AnalyticsError {
    pub(crate) fn no_data(context: impl Into<String>) -> Self {
        Self::NoData {
            context: context.into(),
        }
    }

    /// True for the explicit empty-input signal, from this crate or the
    /// sentiment stage.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            Self::NoData { .. } | Self::Sentiment(SentimentError::NoData { .. })
        )
    }
}
