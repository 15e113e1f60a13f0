//! Synthetic trend records drawn from the industry catalog.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use trendscope_core::{IndustryCatalog, Platform, TrendRecord};

use crate::error::AnalyticsError;

/// Records generated per (day, platform), inclusive.
pub const RECORDS_PER_SLOT: (usize, usize) = (5, 15);
/// Engagement range, inclusive.
pub const ENGAGEMENT_RANGE: (u64, u64) = (100, 10_000);

const CONTENT_TEMPLATES: [&str; 5] = [
    "Check out this {trend} update! {hashtag}",
    "I can't believe how fast {trend} is growing! {hashtag}",
    "Anyone else following the latest {trend} developments? {hashtag}",
    "Just shared my thoughts on {trend} - what do you think? {hashtag}",
    "New post about {trend} is now live! {hashtag}",
];

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[\p{L}\p{N}_]+").expect("valid hashtag regex"));

/// Which platforms to generate records for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformSelection {
    #[default]
    All,
    Only(Platform),
}

impl PlatformSelection {
    #[must_use]
    pub fn platforms(self) -> Vec<Platform> {
        match self {
            PlatformSelection::All => Platform::ALL.to_vec(),
            PlatformSelection::Only(p) => vec![p],
        }
    }
}

impl From<Option<Platform>> for PlatformSelection {
    fn from(value: Option<Platform>) -> Self {
        value.map_or(PlatformSelection::All, PlatformSelection::Only)
    }
}

/// Generate records for every day in `[today - days, today]` and every
/// selected platform.
///
/// Each (day, platform) slot gets 5 to 15 records. Each record picks an
/// industry uniformly, then a trend and hashtag from that industry's
/// vocabulary; engagement is uniform in `[100, 10000]` and growth rate is
/// uniform in the industry's range, rounded to one decimal. `days == 0`
/// yields a single day.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidArgument`] if the catalog (or one of its
/// profiles) is empty, or if the date range underflows the calendar.
pub fn generate_records<R: Rng>(
    catalog: &IndustryCatalog,
    selection: PlatformSelection,
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<TrendRecord>, AnalyticsError> {
    let start = today
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| AnalyticsError::InvalidArgument(format!("{days} days before {today}")))?;
    let platforms = selection.platforms();

    let mut records = Vec::new();
    for date in start.iter_days().take(days as usize + 1) {
        for &platform in &platforms {
            let n = rng.random_range(RECORDS_PER_SLOT.0..=RECORDS_PER_SLOT.1);
            for _ in 0..n {
                records.push(generate_one(catalog, date, platform, rng)?);
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        platforms = platforms.len(),
        days,
        "generated trend records"
    );
    Ok(records)
}

fn generate_one<R: Rng>(
    catalog: &IndustryCatalog,
    date: NaiveDate,
    platform: Platform,
    rng: &mut R,
) -> Result<TrendRecord, AnalyticsError> {
    let empty = |what: &str| AnalyticsError::InvalidArgument(format!("catalog has no {what}"));

    let profile = catalog
        .industries
        .choose(rng)
        .ok_or_else(|| empty("industries"))?;
    let trend = profile.trends.choose(rng).ok_or_else(|| empty("trends"))?;
    let hashtag = profile
        .hashtags
        .choose(rng)
        .ok_or_else(|| empty("hashtags"))?;

    let (low, high) = profile.growth_range;
    if !(low.is_finite() && high.is_finite() && low <= high) {
        return Err(AnalyticsError::InvalidArgument(format!(
            "{} growth range [{low}, {high}] is not a valid interval",
            profile.industry
        )));
    }
    let growth_rate = round1(rng.random_range(low..=high)).clamp(low, high);
    let engagement = rng.random_range(ENGAGEMENT_RANGE.0..=ENGAGEMENT_RANGE.1);

    let template = CONTENT_TEMPLATES[rng.random_range(0..CONTENT_TEMPLATES.len())];
    let content = template
        .replace("{trend}", trend)
        .replace("{hashtag}", hashtag);

    Ok(TrendRecord {
        date,
        platform,
        trend: trend.clone(),
        topic: None,
        hashtags: vec![hashtag.clone()],
        industry: profile.industry,
        engagement,
        growth_rate,
        content: Some(content),
    })
}

/// Pull `#tags` out of free text, in order of first appearance, without duplicates.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for m in HASHTAG_RE.find_iter(text) {
        if !tags.iter().any(|t| t == m.as_str()) {
            tags.push(m.as_str().to_string());
        }
    }
    tags
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use trendscope_core::{Industry, IndustryProfile};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn covers_every_day_and_platform() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = generate_records(
            &IndustryCatalog::builtin(),
            PlatformSelection::All,
            6,
            today(),
            &mut rng,
        )
        .unwrap();

        let days: HashSet<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days.iter().min(), NaiveDate::from_ymd_opt(2024, 7, 9).as_ref());
        assert_eq!(days.iter().max(), Some(&today()));

        for date in days {
            for platform in Platform::ALL {
                let n = records
                    .iter()
                    .filter(|r| r.date == date && r.platform == platform)
                    .count();
                assert!((5..=15).contains(&n), "{date} {platform}: {n} records");
            }
        }
    }

    #[test]
    fn zero_days_is_a_single_day() {
        let mut rng = StdRng::seed_from_u64(4);
        let records = generate_records(
            &IndustryCatalog::builtin(),
            PlatformSelection::Only(Platform::TikTok),
            0,
            today(),
            &mut rng,
        )
        .unwrap();
        assert!((5..=15).contains(&records.len()));
        assert!(records.iter().all(|r| r.date == today()));
        assert!(records.iter().all(|r| r.platform == Platform::TikTok));
    }

    #[test]
    fn records_respect_catalog_vocabulary_and_ranges() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        let records =
            generate_records(&catalog, PlatformSelection::All, 10, today(), &mut rng).unwrap();

        for r in &records {
            let profile = catalog.profile(r.industry).unwrap();
            assert!(profile.trends.contains(&r.trend));
            assert_eq!(r.hashtags.len(), 1);
            assert!(profile.hashtags.contains(&r.hashtags[0]));
            let (low, high) = profile.growth_range;
            assert!(r.growth_rate >= low && r.growth_rate <= high);
            assert!((100..=10_000).contains(&r.engagement));
            let content = r.content.as_deref().unwrap();
            assert!(content.contains(&r.trend));
            assert!(content.ends_with(&r.hashtags[0]));
        }
    }

    #[test]
    fn same_seed_same_records() {
        let catalog = IndustryCatalog::builtin();
        let a = generate_records(
            &catalog,
            PlatformSelection::All,
            3,
            today(),
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        let b = generate_records(
            &catalog,
            PlatformSelection::All,
            3,
            today(),
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_growth_range_is_respected() {
        let mut catalog = IndustryCatalog::builtin();
        catalog.industries = vec![IndustryProfile {
            industry: Industry::Food,
            trends: vec!["Food Reels".to_string()],
            hashtags: vec!["#Foodie".to_string()],
            growth_range: (7.0, 7.0),
        }];
        let mut rng = StdRng::seed_from_u64(6);
        let records =
            generate_records(&catalog, PlatformSelection::All, 1, today(), &mut rng).unwrap();
        assert!(records.iter().all(|r| (r.growth_rate - 7.0).abs() < f64::EPSILON));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let catalog = IndustryCatalog { industries: vec![] };
        let mut rng = StdRng::seed_from_u64(6);
        let err = generate_records(&catalog, PlatformSelection::All, 1, today(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[test]
    fn inverted_or_nan_growth_range_is_rejected() {
        for growth_range in [(18.0, 4.0), (f64::NAN, 10.0), (2.0, f64::INFINITY)] {
            let catalog = IndustryCatalog {
                industries: vec![IndustryProfile {
                    industry: Industry::Food,
                    trends: vec!["Food Reels".to_string()],
                    hashtags: vec!["#Foodie".to_string()],
                    growth_range,
                }],
            };
            let mut rng = StdRng::seed_from_u64(6);
            let err = generate_records(&catalog, PlatformSelection::All, 1, today(), &mut rng)
                .unwrap_err();
            assert!(
                matches!(err, AnalyticsError::InvalidArgument(ref msg) if msg.contains("Food")),
                "expected InvalidArgument, got: {err:?}"
            );
        }
    }

    #[test]
    fn platform_selection_from_option() {
        assert_eq!(PlatformSelection::from(None), PlatformSelection::All);
        assert_eq!(
            PlatformSelection::from(Some(Platform::LinkedIn)).platforms(),
            vec![Platform::LinkedIn]
        );
    }

    #[test]
    fn extract_hashtags_dedupes_in_order() {
        assert_eq!(
            extract_hashtags("Loving #AI and #Web3, more #AI please"),
            vec!["#AI".to_string(), "#Web3".to_string()]
        );
        assert!(extract_hashtags("no tags here").is_empty());
    }

    #[test]
    fn round1_rounds_to_one_decimal() {
        assert!((round1(12.345) - 12.3).abs() < 1e-9);
        assert!((round1(7.96) - 8.0).abs() < 1e-9);
    }
}
