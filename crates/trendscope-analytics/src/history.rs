//! Synthetic per-trend history and related-trend lookup.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

const BASELINE_RANGE: (u64, u64) = (500, 5_000);
const WEEKEND_FACTOR: f64 = 1.2;
const NOISE: f64 = 0.2;

const RELATED: &[(&str, [&str; 5])] = &[
    (
        "AI Ethics",
        [
            "Machine Learning Bias",
            "Responsible AI",
            "AI Governance",
            "Ethical Computing",
            "AI Transparency",
        ],
    ),
    (
        "Web3",
        ["Blockchain", "Decentralized Apps", "Crypto", "NFTs", "Metaverse"],
    ),
    (
        "Sustainable Fashion",
        [
            "Eco Fashion",
            "Slow Fashion",
            "Ethical Clothing",
            "Green Fashion",
            "Circular Fashion",
        ],
    ),
    (
        "Plant-Based Recipes",
        [
            "Vegan Cooking",
            "Meatless Meals",
            "Vegetarian Options",
            "Dairy Alternatives",
            "Whole Foods",
        ],
    ),
    (
        "Home Workouts",
        [
            "No-Equipment Exercise",
            "Living Room Fitness",
            "Online Training",
            "Fitness Apps",
            "Virtual Classes",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub trend: String,
    pub volume: u64,
}

/// One simulated volume per day over `[today - days, today]`.
///
/// Volume starts from a random baseline and ramps linearly to twice that by
/// the last day, with a 1.2x weekend lift and +/-20% noise per day.
///
/// # Errors
///
/// [`AnalyticsError::InvalidArgument`] when the range underflows the calendar.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn historical_series<R: Rng>(
    trend: &str,
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<HistoryPoint>, AnalyticsError> {
    let start = today
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| AnalyticsError::InvalidArgument(format!("{days} days before {today}")))?;
    let baseline = rng.random_range(BASELINE_RANGE.0..=BASELINE_RANGE.1) as f64;

    Ok(start
        .iter_days()
        .take(days as usize + 1)
        .enumerate()
        .map(|(i, date)| {
            let day_factor = if days == 0 {
                1.0
            } else {
                1.0 + i as f64 / f64::from(days)
            };
            let weekend = if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                WEEKEND_FACTOR
            } else {
                1.0
            };
            let noise = rng.random_range((1.0 - NOISE)..=(1.0 + NOISE));
            HistoryPoint {
                date,
                trend: trend.to_string(),
                volume: (baseline * day_factor * weekend * noise).floor() as u64,
            }
        })
        .collect())
}

/// Up to `limit` trends related to `trend`. Unknown trends get numbered
/// variations of their own name.
#[must_use]
pub fn related_trends(trend: &str, limit: usize) -> Vec<String> {
    match RELATED.iter().find(|(name, _)| *name == trend) {
        Some((_, related)) => related.iter().take(limit).map(ToString::to_string).collect(),
        None => (1..=limit)
            .map(|k| format!("{trend} - Variation {k}"))
            .collect(),
    }
}
