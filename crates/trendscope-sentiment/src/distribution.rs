//! Label counts and percentage shares.

use std::collections::BTreeMap;

use trendscope_core::{Industry, SentimentLabel};

use crate::error::SentimentError;
use crate::types::{ClassifiedRecord, IndustrySentiment, SentimentShare};

/// Count labels and compute each label's share of the total.
///
/// Only labels that occur are listed, in positive/neutral/negative order.
/// Percentages carry one decimal place and always sum to exactly 100.0.
///
/// # Errors
///
/// Returns [`SentimentError::NoData`] for an empty collection.
pub fn sentiment_distribution(
    records: &[ClassifiedRecord],
) -> Result<Vec<SentimentShare>, SentimentError> {
    if records.is_empty() {
        return Err(SentimentError::NoData {
            context: "sentiment distribution of an empty collection".to_string(),
        });
    }

    let counts = count_labels(records.iter().map(|r| r.sentiment));
    let shares = split_percentages(&counts.iter().map(|(_, c)| *c).collect::<Vec<_>>());

    Ok(counts
        .into_iter()
        .zip(shares)
        .map(|((label, count), percentage)| SentimentShare {
            label,
            count,
            percentage,
        })
        .collect())
}

/// Per-industry label counts with shares computed within each industry.
///
/// # Errors
///
/// Returns [`SentimentError::NoData`] for an empty collection.
pub fn sentiment_by_industry(
    records: &[ClassifiedRecord],
) -> Result<Vec<IndustrySentiment>, SentimentError> {
    if records.is_empty() {
        return Err(SentimentError::NoData {
            context: "industry sentiment of an empty collection".to_string(),
        });
    }

    let mut by_industry: BTreeMap<Industry, Vec<SentimentLabel>> = BTreeMap::new();
    for r in records {
        by_industry
            .entry(r.record.industry)
            .or_default()
            .push(r.sentiment);
    }

    let mut rows = Vec::new();
    for (industry, labels) in by_industry {
        let counts = count_labels(labels.into_iter());
        let shares = split_percentages(&counts.iter().map(|(_, c)| *c).collect::<Vec<_>>());
        rows.extend(
            counts
                .into_iter()
                .zip(shares)
                .map(|((label, count), percentage)| IndustrySentiment {
                    industry,
                    label,
                    count,
                    percentage,
                }),
        );
    }

    Ok(rows)
}

/// Non-zero label counts in [`SentimentLabel::ALL`] order.
fn count_labels(labels: impl Iterator<Item = SentimentLabel>) -> Vec<(SentimentLabel, usize)> {
    let mut counts: BTreeMap<SentimentLabel, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    SentimentLabel::ALL
        .into_iter()
        .filter_map(|label| counts.get(&label).map(|&c| (label, c)))
        .collect()
}

/// Split 100% across `counts` in tenths of a percent using largest-remainder
/// rounding, so the one-decimal values always add up to exactly 100.0.
///
/// Returns all zeros when the counts sum to zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn split_percentages(counts: &[usize]) -> Vec<f64> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }

    let mut tenths: Vec<usize> = counts.iter().map(|c| c * 1000 / total).collect();
    let mut remainders: Vec<(usize, usize)> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c * 1000 % total))
        .collect();
    // Largest remainder first; earlier position wins ties.
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let assigned: usize = tenths.iter().sum();
    for &(i, _) in remainders.iter().take(1000 - assigned) {
        tenths[i] += 1;
    }

    tenths.into_iter().map(|t| t as f64 / 10.0).collect()
}
