use chrono::NaiveDate;
use trendscope_core::{Industry, Platform};

use super::*;

fn record(
    trend: &str,
    platform: Platform,
    industry: Industry,
    hashtags: &[&str],
    engagement: u64,
) -> TrendRecord {
    TrendRecord {
        date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        platform,
        trend: trend.to_string(),
        topic: None,
        hashtags: hashtags.iter().map(ToString::to_string).collect(),
        industry,
        engagement,
        growth_rate: 10.0,
        content: None,
    }
}

fn sample() -> Vec<TrendRecord> {
    vec![
        record("AI Ethics", Platform::Twitter, Industry::Technology, &["#AI"], 4_000),
        record("AI Ethics", Platform::TikTok, Industry::Technology, &["#AI"], 3_000),
        record("Web3", Platform::Twitter, Industry::Technology, &["#Web3"], 500),
        record("Food Reels", Platform::YouTube, Industry::Food, &["#Foodie"], 6_000),
    ]
}

fn titles(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn empty_input_is_no_data() {
    let err = generate_recommendations(&[]).unwrap_err();
    assert!(err.is_no_data(), "expected NoData, got: {err:?}");
}

#[test]
fn every_category_is_present() {
    let set = generate_recommendations(&sample()).unwrap();
    for category in RecommendationCategory::ALL {
        assert!(!set.get(category).is_empty(), "{category} is empty");
    }
    assert_eq!(set.iter().count(), 3);
}

#[test]
fn top_topic_reach_is_its_summed_engagement() {
    let set = generate_recommendations(&sample()).unwrap();
    let content = set.get(RecommendationCategory::ContentStrategy);
    let top = content
        .iter()
        .find(|r| r.title.starts_with("Create content around"))
        .unwrap();
    assert_eq!(top.title, "Create content around 'AI Ethics'");
    assert_eq!(top.metrics.potential_reach, 7_000);
    assert_eq!(top.metrics.relevance, 9);
}

#[test]
fn top_industry_is_by_record_count() {
    let set = generate_recommendations(&sample()).unwrap();
    let content = set.get(RecommendationCategory::ContentStrategy);
    assert!(titles(content).contains(&"Leverage 'Technology' industry trends"));
}

#[test]
fn format_steps_follow_platforms_present() {
    let set = generate_recommendations(&sample()).unwrap();
    let formats = set
        .get(RecommendationCategory::ContentStrategy)
        .iter()
        .find(|r| r.title == "Optimize content formats for each platform")
        .unwrap();
    assert_eq!(
        formats.action_steps[..3],
        [
            "For Twitter, focus on short-form text with visuals".to_string(),
            "For TikTok, focus on short-form vertical videos".to_string(),
            "For YouTube, focus on platform-specific content".to_string(),
        ]
    );
    assert_eq!(formats.action_steps.len(), 4);
}

#[test]
fn categories_are_ordered_by_relevance() {
    let set = generate_recommendations(&sample()).unwrap();
    for (category, recs) in set.iter() {
        assert!(
            recs.windows(2)
                .all(|w| w[0].metrics.relevance >= w[1].metrics.relevance),
            "{category} not ranked"
        );
    }
}

#[test]
fn hashtag_recommendation_names_top_tags() {
    let set = generate_recommendations(&sample()).unwrap();
    let hashtags = &set.get(RecommendationCategory::EngagementOpportunities)[0];
    assert_eq!(hashtags.title, "Utilize trending hashtags strategically");
    assert_eq!(
        hashtags.action_steps[0],
        "Include #AI, #Foodie, #Web3 in your upcoming posts"
    );
}

#[test]
fn hashtag_recommendation_omitted_without_hashtags() {
    let records = vec![record("Web3", Platform::Twitter, Industry::Technology, &[], 1)];
    let set = generate_recommendations(&records).unwrap();
    let engagement = set.get(RecommendationCategory::EngagementOpportunities);
    assert_eq!(engagement.len(), 3);
    assert!(!titles(engagement).contains(&"Utilize trending hashtags strategically"));
}

#[test]
fn platform_strategies_only_for_known_playbooks() {
    let set = generate_recommendations(&sample()).unwrap();
    let platform = titles(set.get(RecommendationCategory::PlatformSpecific));
    assert!(platform.contains(&"Twitter Strategy: Leverage real-time trends"));
    assert!(platform.contains(&"TikTok Strategy: Embrace trend participation"));
    assert!(!platform.iter().any(|t| t.starts_with("Instagram")));
    assert!(!platform.iter().any(|t| t.starts_with("YouTube")));
    assert!(platform.contains(&"Implement a cross-platform strategy"));
    assert!(platform.contains(&"Explore emerging platform opportunities"));
}

#[test]
fn set_serializes_with_category_names() {
    let set = generate_recommendations(&sample()).unwrap();
    let json = serde_json::to_value(&set).unwrap();
    assert!(json.get("Content Strategy").is_some());
    assert!(json.get("Engagement Opportunities").is_some());
    assert!(json.get("Platform-Specific").is_some());
}

#[test]
fn custom_includes_playbook_and_top_trend() {
    let recs = custom_recommendations(
        &sample(),
        Some(Industry::Technology),
        Some(Platform::Twitter),
    );
    assert_eq!(
        titles(&recs),
        vec![
            "Tech Industry: Focus on educational content",
            "Capitalize on 'AI Ethics' trend",
        ]
    );
    assert_eq!(recs[1].metrics.potential_reach, 4_000);
}

#[test]
fn custom_without_matches_keeps_only_playbook() {
    let recs = custom_recommendations(&sample(), Some(Industry::Fashion), None);
    assert_eq!(
        titles(&recs),
        vec!["Fashion Industry: Emphasize sustainability narratives"]
    );
}

#[test]
fn custom_for_industry_without_playbook() {
    let recs = custom_recommendations(&sample(), Some(Industry::Food), None);
    assert_eq!(titles(&recs), vec!["Capitalize on 'Food Reels' trend"]);
    assert_eq!(recs[0].metrics.potential_reach, 6_000);

    assert!(custom_recommendations(&[], None, None).is_empty());
}
