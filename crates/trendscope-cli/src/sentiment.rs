//! Sentiment distribution, per-industry breakdown and keywords.

use std::collections::BTreeMap;

use serde::Serialize;
use trendscope_analytics::AnalyticsError;
use trendscope_core::SentimentLabel;
use trendscope_sentiment::{
    classify_sentiment, sentiment_by_industry, sentiment_distribution, sentiment_keywords,
    IndustrySentiment, LexiconScorer, SentimentShare,
};

use crate::context::Context;
use crate::output::print_json;

#[derive(Serialize)]
struct SentimentOutput {
    distribution: Vec<SentimentShare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_industry: Option<Vec<IndustrySentiment>>,
    keywords: BTreeMap<SentimentLabel, Vec<String>>,
}

pub(crate) fn run_sentiment(ctx: &mut Context, by_industry: bool) -> anyhow::Result<()> {
    let classified = classify_sentiment(&ctx.records, &LexiconScorer::new(), &mut ctx.rng);
    let distribution = sentiment_distribution(&classified).map_err(AnalyticsError::from)?;
    let industries = if by_industry {
        Some(sentiment_by_industry(&classified).map_err(AnalyticsError::from)?)
    } else {
        None
    };
    let keywords = sentiment_keywords(&classified);

    if ctx.json {
        return print_json(&SentimentOutput {
            distribution,
            by_industry: industries,
            keywords,
        });
    }

    println!("{:<10}{:>8}{:>9}", "SENTIMENT", "POSTS", "SHARE");
    for s in &distribution {
        println!("{:<10}{:>8}{:>8.1}%", s.label.as_str(), s.count, s.percentage);
    }

    if let Some(rows) = &industries {
        println!();
        println!("{:<15}{:<10}{:>8}{:>9}", "INDUSTRY", "SENTIMENT", "POSTS", "SHARE");
        for row in rows {
            println!(
                "{:<15}{:<10}{:>8}{:>8.1}%",
                row.industry.as_str(),
                row.label.as_str(),
                row.count,
                row.percentage
            );
        }
    }

    println!();
    for (label, words) in &keywords {
        if words.is_empty() {
            continue;
        }
        println!("{label} keywords: {}", words.join(", "));
    }
    Ok(())
}
