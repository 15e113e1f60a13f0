//! Markdown summary report.

use chrono::Utc;
use trendscope_analytics::{run_pipeline, PipelineConfig, TrendReport};
use trendscope_core::{format_compact, RecordFilter};
use trendscope_sentiment::LexiconScorer;

use crate::context::Context;
use crate::output::print_json;

const TOP_ROWS: usize = 5;
const FORECAST_TRENDS: usize = 3;

/// Run every stage and print a markdown report (or the full report as JSON).
///
/// # Errors
///
/// Returns an error if the pipeline fails; an empty record set surfaces as
/// the no-data signal.
pub(crate) fn run_report(ctx: &mut Context) -> anyhow::Result<()> {
    let config = PipelineConfig {
        forecast: ctx.forecast,
    };
    // Records are already filtered.
    let report = run_pipeline(
        &ctx.records,
        &RecordFilter::default(),
        &config,
        &LexiconScorer::new(),
        &mut ctx.rng,
    )?;
    if ctx.json {
        return print_json(&report);
    }

    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("# Trend Report");
    println!();
    println!("**Generated**: {now}");
    println!("**Filter**: {}", ctx.filter_label());
    println!("**Window**: {} days ending {}", ctx.days, ctx.today);
    println!("**Records**: {} of {} generated", report.record_count, ctx.generated);
    println!();
    println!("---");

    print_hashtags(&report);
    print_topics(&report);
    print_sentiment(&report);
    print_forecast(&report);
    print_recommendations(&report);
    Ok(())
}

fn print_hashtags(report: &TrendReport) {
    println!();
    println!("## Top Hashtags");
    println!();
    let Some(hashtags) = &report.hashtags else {
        println!("_No hashtags in the selected records._");
        return;
    };
    println!("| Hashtag | Engagement | Avg Growth |");
    println!("|---------|------------|------------|");
    for m in hashtags.iter().take(TOP_ROWS) {
        println!(
            "| {} | {} | {:.1}% |",
            m.key,
            format_compact(m.total_engagement),
            m.mean_growth_rate
        );
    }
}

fn print_topics(report: &TrendReport) {
    println!();
    println!("## Top Topics");
    println!();
    println!("| Topic | Posts | Engagement | Avg Growth |");
    println!("|-------|-------|------------|------------|");
    for m in report.topics.iter().take(TOP_ROWS) {
        println!(
            "| {} | {} | {} | {:.1}% |",
            m.key,
            m.count,
            format_compact(m.total_engagement),
            m.mean_growth_rate
        );
    }
}

fn print_sentiment(report: &TrendReport) {
    println!();
    println!("## Sentiment");
    println!();
    println!("| Sentiment | Posts | Share |");
    println!("|-----------|-------|-------|");
    for s in &report.sentiment {
        println!("| {} | {} | {:.1}% |", s.label, s.count, s.percentage);
    }
}

fn print_forecast(report: &TrendReport) {
    println!();
    println!("## Forecast");
    println!();
    // Trends with the highest mean engagement first.
    let mut trends: Vec<&str> = Vec::new();
    for p in &report.forecast {
        if !trends.contains(&p.trend.as_str()) {
            trends.push(p.trend.as_str());
        }
    }
    trends.sort_by(|a, b| {
        let volume = |t: &str| {
            report
                .forecast
                .iter()
                .find(|p| p.trend == t)
                .map_or(0.0, |p| p.anchor_volume)
        };
        volume(b).total_cmp(&volume(a))
    });

    println!("| Trend | Date | Projected Volume | Growth |");
    println!("|-------|------|------------------|--------|");
    for trend in trends.into_iter().take(FORECAST_TRENDS) {
        for p in report.forecast.iter().filter(|p| p.trend == trend) {
            println!(
                "| {} | {} | {} | {:.1}% |",
                p.trend,
                p.forecast_date,
                format_compact(p.forecast_volume),
                p.growth_forecast_pct
            );
        }
    }
}

fn print_recommendations(report: &TrendReport) {
    println!();
    println!("## Recommendations");
    for (category, recs) in report.recommendations.iter() {
        println!();
        println!("### {category}");
        println!();
        for rec in recs {
            println!("- {}", rec.title);
        }
    }
}
