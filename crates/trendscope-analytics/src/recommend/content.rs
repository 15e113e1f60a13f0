use trendscope_core::{Platform, Recommendation, TrendRecord};

use super::{recommendation, steps};
use crate::aggregator::{industry_counts, rank_topics};
use crate::error::AnalyticsError;

pub(super) fn recommendations(
    records: &[TrendRecord],
) -> Result<Vec<Recommendation>, AnalyticsError> {
    let mut recs = Vec::new();

    let mut topics = rank_topics(records)?;
    topics.sort_by(|a, b| {
        b.total_engagement
            .cmp(&a.total_engagement)
            .then_with(|| a.key.cmp(&b.key))
    });
    if let Some(top) = topics.first() {
        recs.push(recommendation(
            format!("Create content around '{}'", top.key),
            format!(
                "'{}' is trending with high engagement. Creating content on this topic can help \
                 you reach a larger audience and increase engagement.",
                top.key
            ),
            vec![
                format!("Develop a series of posts or articles discussing '{}'", top.key),
                "Incorporate relevant hashtags in your content".to_string(),
                "Create visual content (images, videos) related to this topic".to_string(),
                "Consider starting conversations about this topic in comments or replies"
                    .to_string(),
            ],
            (9, top.total_engagement, 6),
        ));
    }

    let mut format_steps: Vec<String> = present_platforms(records)
        .into_iter()
        .map(|p| format!("For {p}, focus on {}", preferred_format(p)))
        .collect();
    format_steps.push(
        "Repurpose content across platforms while adapting to each platform's format".to_string(),
    );
    recs.push(recommendation(
        "Optimize content formats for each platform",
        "Different platforms favor different content formats. Adapting your content to each \
         platform's preferred format will increase engagement.",
        format_steps,
        (8, 25_000, 7),
    ));

    recs.push(recommendation(
        "Optimize posting schedule based on trend cycles",
        "Posting at optimal times when your audience is most active can significantly increase \
         engagement and visibility.",
        steps(&[
            "Analyze your audience's activity patterns to identify peak engagement times",
            "Schedule posts to align with trend lifecycle (early for thought leadership, during \
             peak for maximum reach)",
            "Maintain consistent posting frequency to build audience expectations",
            "Test different posting times and analyze performance",
        ]),
        (7, 15_000, 5),
    ));

    if let Some((industry, _)) = industry_counts(records).first() {
        recs.push(recommendation(
            format!("Leverage '{industry}' industry trends"),
            format!(
                "The {industry} industry is showing high engagement. Creating content that \
                 connects your brand to this industry can help you tap into this engaged audience."
            ),
            vec![
                format!("Identify connections between your brand/content and {industry}"),
                "Partner with influencers or brands in this industry".to_string(),
                "Join conversations about trending topics in this industry".to_string(),
                "Create content that bridges your niche with this industry".to_string(),
            ],
            (8, 20_000, 6),
        ));
    }

    Ok(recs)
}

/// Platforms that occur in `records`, in canonical order.
pub(super) fn present_platforms(records: &[TrendRecord]) -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|p| records.iter().any(|r| r.platform == *p))
        .collect()
}

fn preferred_format(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => "short-form text with visuals",
        Platform::Instagram => "high-quality images and carousel posts",
        Platform::TikTok => "short-form vertical videos",
        Platform::YouTube | Platform::LinkedIn => "platform-specific content",
    }
}
