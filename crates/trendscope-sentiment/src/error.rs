use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("no data: {context}")]
    NoData { context: String },
}
