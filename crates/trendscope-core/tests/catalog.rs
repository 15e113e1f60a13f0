//! Loads the shipped catalog file and checks it agrees with the built-in
//! vocabulary, plus the filter applied to a hand-built record set.

use std::path::PathBuf;

use chrono::NaiveDate;
use trendscope_core::{
    load_catalog, ConfigError, Industry, IndustryCatalog, Platform, RecordFilter, TrendRecord,
};

fn shipped_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/industries.yaml")
}

#[test]
fn shipped_catalog_matches_builtin() {
    let loaded = load_catalog(&shipped_catalog_path()).expect("shipped catalog should load");
    assert_eq!(loaded, IndustryCatalog::builtin());
}

#[test]
fn missing_catalog_file_is_io_error() {
    let result = load_catalog(&PathBuf::from("/definitely/not/here/industries.yaml"));
    assert!(
        matches!(result, Err(ConfigError::CatalogFileIo { .. })),
        "expected CatalogFileIo, got: {result:?}"
    );
}

#[test]
fn every_builtin_trend_maps_back_to_its_industry() {
    let catalog = IndustryCatalog::builtin();
    for profile in &catalog.industries {
        for trend in &profile.trends {
            assert_eq!(catalog.industry_of_trend(trend), Some(profile.industry));
        }
    }
}

#[test]
fn combined_filter_narrows_on_every_dimension() {
    let day = |d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
    let record = |date, platform, industry, trend: &str, tag: &str| TrendRecord {
        date,
        platform,
        trend: trend.to_string(),
        topic: None,
        hashtags: vec![tag.to_string()],
        industry,
        engagement: 100,
        growth_rate: 5.0,
        content: None,
    };
    let records = vec![
        record(day(1), Platform::Twitter, Industry::Technology, "AI Ethics", "#AI"),
        record(day(5), Platform::Twitter, Industry::Technology, "AI Ethics", "#AI"),
        record(day(5), Platform::TikTok, Industry::Technology, "AI Ethics", "#AI"),
        record(day(5), Platform::Twitter, Industry::Food, "Food Reels", "#Foodie"),
        record(day(5), Platform::Twitter, Industry::Technology, "Web3", "#Web3"),
    ];

    let filter = RecordFilter {
        platform: Some(Platform::Twitter),
        industry: Some(Industry::Technology),
        since: Some(day(3)),
        search: Some("ai".to_string()),
    };
    let kept = filter.apply(&records);
    assert_eq!(kept, vec![records[1].clone()]);
}
