use trendscope_core::{Industry, Platform, Recommendation, RecordFilter, TrendRecord};

use super::{rank, recommendation, steps};
use crate::aggregator::rank_trends;

/// Recommendations narrowed to an industry and/or platform.
///
/// Yields an industry playbook when one exists for `industry`, plus a
/// recommendation built around the top trend by engagement in the matching
/// records. Never fails: no matching records just means no trend entry.
#[must_use]
pub fn custom_recommendations(
    records: &[TrendRecord],
    industry: Option<Industry>,
    platform: Option<Platform>,
) -> Vec<Recommendation> {
    let filter = RecordFilter {
        platform,
        industry,
        ..RecordFilter::default()
    };
    let matching = filter.apply(records);

    let mut recs = Vec::new();
    if let Some(playbook) = industry.and_then(industry_playbook) {
        recs.push(playbook);
    }

    if let Some(top) = rank_trends(&matching).ok().and_then(|t| t.into_iter().next()) {
        let trend = &top.key;
        recs.push(recommendation(
            format!("Capitalize on '{trend}' trend"),
            format!(
                "The '{trend}' trend is showing significant engagement in your selected filters. \
                 Creating content around this trend can increase visibility."
            ),
            vec![
                format!("Research the origins and current state of the '{trend}' trend"),
                "Create content that adds a unique perspective to this trend".to_string(),
                "Analyze what content about this trend is performing well".to_string(),
                "Develop a multi-post strategy around this trend".to_string(),
                "Monitor engagement to determine when to pivot to new trends".to_string(),
            ],
            (9, top.total_engagement, 5),
        ));
    }

    rank(&mut recs);
    tracing::debug!(
        matching = matching.len(),
        recommendations = recs.len(),
        "custom recommendations generated"
    );
    recs
}

fn industry_playbook(industry: Industry) -> Option<Recommendation> {
    let (title, description, action_steps) = match industry {
        Industry::Technology => (
            "Tech Industry: Focus on educational content",
            "In the technology sector, educational content that explains complex concepts \
             performs exceptionally well.",
            [
                "Create how-to guides and tutorials related to trending tech topics",
                "Develop infographics that simplify technical concepts",
                "Start conversations about ethical implications of new technologies",
                "Share insights about the future of technology in your niche",
                "Analyze and comment on major tech news and product launches",
            ],
        ),
        Industry::Fashion => (
            "Fashion Industry: Emphasize sustainability narratives",
            "Sustainability is a major trend in fashion. Highlighting sustainable practices can \
             resonate with conscious consumers.",
            [
                "Showcase sustainable materials and production methods",
                "Create content about ethical fashion choices",
                "Highlight the longevity and versatility of pieces",
                "Partner with sustainable brands or initiatives",
                "Educate followers about reducing fashion waste",
            ],
        ),
        Industry::Entertainment => (
            "Entertainment Industry: Leverage fan communities",
            "Entertainment trends are driven by passionate fan communities. Engaging with these \
             communities can amplify reach.",
            [
                "Create content analyzing trending shows, movies, or music",
                "Develop reaction content to new releases",
                "Host discussions about popular entertainment topics",
                "Create themed content around major entertainment events",
                "Collaborate with fan accounts and community leaders",
            ],
        ),
        _ => return None,
    };
    Some(recommendation(
        title,
        description,
        steps(&action_steps),
        (9, 25_000, 6),
    ))
}
