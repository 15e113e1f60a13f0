//! Compound-growth extrapolation per trend.

use std::collections::BTreeMap;

use chrono::Days;
use rand::Rng;
use serde::{Deserialize, Serialize};
use trendscope_core::{ForecastPoint, TrendRecord};

use crate::error::AnalyticsError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Days projected past each trend's latest observation.
    pub horizon_days: u32,
    /// Half-width of the uniform noise multiplier: volumes are scaled by a
    /// factor drawn from `[1 - jitter, 1 + jitter]`.
    pub jitter: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            jitter: 0.1,
        }
    }
}

impl ForecastConfig {
    /// Default horizon with the noise multiplier pinned to 1.0.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            jitter: 0.0,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), AnalyticsError> {
        if self.horizon_days == 0 {
            return Err(AnalyticsError::InvalidArgument(
                "forecast horizon must be at least one day".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.jitter) {
            return Err(AnalyticsError::InvalidArgument(format!(
                "forecast jitter must be in [0, 1), got {}",
                self.jitter
            )));
        }
        Ok(())
    }
}

/// Project `horizon_days` points for every distinct trend.
///
/// Each trend's baseline is the mean engagement and mean growth rate over all
/// of its records. Offset `i` projects
/// `round(mean_engagement * (1 + mean_growth / 100)^i * U)` on
/// `latest_date + i`, with `U` uniform in `[1 - jitter, 1 + jitter]`.
/// Trends are emitted alphabetically, offsets in ascending order.
///
/// # Errors
///
/// [`AnalyticsError::NoData`] for an empty collection and
/// [`AnalyticsError::InvalidArgument`] for an invalid config.
pub fn forecast_trends<R: Rng>(
    records: &[TrendRecord],
    config: &ForecastConfig,
    rng: &mut R,
) -> Result<Vec<ForecastPoint>, AnalyticsError> {
    config.validate()?;
    if records.is_empty() {
        return Err(AnalyticsError::no_data("forecast: no records"));
    }

    let mut by_trend: BTreeMap<&str, Vec<&TrendRecord>> = BTreeMap::new();
    for r in records {
        by_trend.entry(r.trend.as_str()).or_default().push(r);
    }

    let mut points = Vec::with_capacity(by_trend.len() * config.horizon_days as usize);
    for (trend, history) in by_trend {
        points.extend(forecast_one(trend, &history, config, rng)?);
    }

    tracing::debug!(
        points = points.len(),
        horizon_days = config.horizon_days,
        "trend forecast complete"
    );
    Ok(points)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn forecast_one<R: Rng>(
    trend: &str,
    history: &[&TrendRecord],
    config: &ForecastConfig,
    rng: &mut R,
) -> Result<Vec<ForecastPoint>, AnalyticsError> {
    let Some(earliest) = history.iter().min_by_key(|r| r.date) else {
        return Ok(Vec::new());
    };
    let latest_date = history.iter().map(|r| r.date).max().unwrap_or(earliest.date);

    let n = history.len() as f64;
    let mean_engagement = history.iter().map(|r| r.engagement as f64).sum::<f64>() / n;
    let mean_growth = history.iter().map(|r| r.growth_rate).sum::<f64>() / n;
    let daily_factor = 1.0 + mean_growth / 100.0;

    let mut out = Vec::with_capacity(config.horizon_days as usize);
    for i in 1..=config.horizon_days {
        let forecast_date = latest_date
            .checked_add_days(Days::new(u64::from(i)))
            .ok_or_else(|| {
                AnalyticsError::InvalidArgument(format!(
                    "forecast date overflows after {latest_date}"
                ))
            })?;

        let multiplier = if config.jitter > 0.0 {
            rng.random_range((1.0 - config.jitter)..=(1.0 + config.jitter))
        } else {
            1.0
        };
        let exponent = i32::try_from(i).unwrap_or(i32::MAX);
        let volume = (mean_engagement * daily_factor.powi(exponent) * multiplier).round();

        out.push(ForecastPoint {
            trend: trend.to_string(),
            anchor_date: latest_date,
            anchor_volume: mean_engagement,
            forecast_date,
            // Saturating float-to-int cast: negative projections land on 0.
            forecast_volume: volume.max(0.0) as u64,
            growth_forecast_pct: mean_growth,
            industry: earliest.industry,
        });
    }
    Ok(out)
}
