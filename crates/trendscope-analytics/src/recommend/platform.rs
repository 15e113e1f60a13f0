use trendscope_core::{Platform, Recommendation, TrendRecord};

use super::content::present_platforms;
use super::{recommendation, steps};

pub(super) fn recommendations(records: &[TrendRecord]) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = present_platforms(records)
        .into_iter()
        .filter_map(strategy)
        .collect();

    recs.push(recommendation(
        "Implement a cross-platform strategy",
        "Different platforms reach different audiences. A coordinated cross-platform approach \
         can maximize reach and engagement.",
        steps(&[
            "Maintain consistent branding across platforms while adapting content formats",
            "Create a content calendar that coordinates messaging across platforms",
            "Drive traffic between your platforms through cross-promotion",
            "Analyze which content performs best on each platform",
            "Prioritize platforms based on audience engagement and business goals",
        ]),
        (8, 35_000, 8),
    ));

    recs.push(recommendation(
        "Explore emerging platform opportunities",
        "New and emerging platforms often offer less competition and higher organic reach. \
         Consider establishing an early presence on these platforms.",
        steps(&[
            "Research user demographics of emerging platforms",
            "Test content formats on new platforms with growing user bases",
            "Adapt your content strategy to each platform's unique features",
            "Monitor performance to determine which platforms warrant continued investment",
            "Balance resources between established and emerging platforms",
        ]),
        (6, 15_000, 7),
    ));

    recs
}

/// Dedicated playbook for a platform, if one exists.
fn strategy(platform: Platform) -> Option<Recommendation> {
    let (title, description, action_steps) = match platform {
        Platform::Twitter => (
            "Twitter Strategy: Leverage real-time trends",
            "Twitter excels at real-time conversation and trending topics. Capitalize on this by \
             engaging with current events and trending hashtags.",
            [
                "Monitor Twitter's trending topics daily",
                "Join conversations with thoughtful responses, not just self-promotion",
                "Use Twitter threads for in-depth analysis of trending topics",
                "Incorporate trending hashtags when relevant",
                "Increase posting frequency during peak trending periods",
            ],
        ),
        Platform::Instagram => (
            "Instagram Strategy: Focus on visual storytelling",
            "Instagram is a visual platform where aesthetic consistency and storytelling drive \
             engagement with trending content.",
            [
                "Create visually cohesive content related to trending topics",
                "Use Instagram Stories for behind-the-scenes and time-sensitive trend content",
                "Create Instagram Guides to curate trend-related content",
                "Utilize Instagram Reels to capitalize on short-form video trends",
                "Incorporate trending audio and effects in your content",
            ],
        ),
        Platform::TikTok => (
            "TikTok Strategy: Embrace trend participation",
            "TikTok is driven by trends and challenges. Participating in these trends can \
             significantly increase visibility and follower growth.",
            [
                "Monitor the Discover page for emerging trends",
                "Put your unique spin on trending challenges or formats",
                "Use trending sounds and effects in your videos",
                "Post consistently to improve algorithm visibility",
                "Analyze trending content structure and adapt it for your niche",
            ],
        ),
        Platform::YouTube | Platform::LinkedIn => return None,
    };
    Some(recommendation(
        title,
        description,
        steps(&action_steps),
        (9, 30_000, 7),
    ))
}
