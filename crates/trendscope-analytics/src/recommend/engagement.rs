use trendscope_core::{Recommendation, TrendRecord};

use super::{recommendation, steps};
use crate::aggregator::hashtag_frequencies;

const SUGGESTED_HASHTAGS: usize = 3;

pub(super) fn recommendations(records: &[TrendRecord]) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let top_tags: Vec<String> = hashtag_frequencies(records)
        .into_iter()
        .take(SUGGESTED_HASHTAGS)
        .map(|(tag, _)| tag)
        .collect();
    if top_tags.is_empty() {
        tracing::debug!("no hashtags in input; skipping hashtag recommendation");
    } else {
        recs.push(recommendation(
            "Utilize trending hashtags strategically",
            "Incorporating trending hashtags can significantly increase your content's \
             discoverability, but they should be relevant to your content.",
            vec![
                format!("Include {} in your upcoming posts", top_tags.join(", ")),
                "Research hashtag performance before using them".to_string(),
                "Use a mix of trending and niche hashtags".to_string(),
                "Don't overuse hashtags - focus on the most relevant ones".to_string(),
            ],
            (9, 30_000, 3),
        ));
    }

    recs.push(recommendation(
        "Join trending conversations authentically",
        "Participating in trending conversations can increase visibility, but authenticity is \
         key to avoid seeming opportunistic.",
        steps(&[
            "Monitor trending topics related to your industry",
            "Contribute meaningful insights to ongoing conversations",
            "Ask questions to encourage engagement",
            "Respond promptly to comments and mentions",
            "Create conversation starters related to trending topics",
        ]),
        (8, 15_000, 7),
    ));

    recs.push(recommendation(
        "Leverage collaboration opportunities",
        "Collaborating with other creators or brands can help you tap into new audiences and \
         increase engagement.",
        steps(&[
            "Identify potential collaborators in your niche or adjacent niches",
            "Propose mutually beneficial collaboration ideas",
            "Create co-branded content that aligns with current trends",
            "Cross-promote content across your platforms",
            "Analyze performance of collaborative content to refine future approaches",
        ]),
        (7, 25_000, 8),
    ));

    recs.push(recommendation(
        "Encourage user-generated content",
        "User-generated content increases engagement and creates a sense of community while \
         providing authentic content.",
        steps(&[
            "Create branded hashtags for users to tag their content",
            "Run contests or challenges related to trending topics",
            "Feature user content on your platforms (with permission)",
            "Respond to and engage with user-generated content",
            "Provide clear guidelines for the type of content you're looking for",
        ]),
        (8, 20_000, 6),
    ));

    recs
}
