//! Record listing, rankings and per-trend lookups.

use trendscope_analytics::{
    aggregate_timeline, historical_series, rank_hashtags, rank_topics, related_trends,
    trend_scores, trend_velocity,
};
use trendscope_core::format_compact;

use crate::context::Context;
use crate::output::{fit, print_json};

pub(crate) fn run_generate(ctx: &Context, limit: Option<usize>) -> anyhow::Result<()> {
    let shown = &ctx.records[..limit.map_or(ctx.records.len(), |l| l.min(ctx.records.len()))];
    if ctx.json {
        return print_json(shown);
    }

    println!(
        "{:<12}{:<11}{:<24}{:<15}{:<18}{:>10}{:>8}",
        "DATE", "PLATFORM", "TREND", "INDUSTRY", "HASHTAG", "ENGAGE", "GROWTH"
    );
    for r in shown {
        println!(
            "{:<12}{:<11}{:<24}{:<15}{:<18}{:>10}{:>7.1}%",
            r.date.to_string(),
            r.platform.as_str(),
            fit(&r.trend, 23),
            r.industry.as_str(),
            fit(r.hashtags.first().map_or("", String::as_str), 17),
            r.engagement,
            r.growth_rate
        );
    }
    println!(
        "{} of {} records shown ({} generated)",
        shown.len(),
        ctx.records.len(),
        ctx.generated
    );
    Ok(())
}

pub(crate) fn run_hashtags(ctx: &Context, limit: usize) -> anyhow::Result<()> {
    let ranked = rank_hashtags(&ctx.records)?;
    let top = &ranked[..limit.min(ranked.len())];
    if ctx.json {
        return print_json(top);
    }

    println!("{:<24}{:>12}{:>10}{:>8}", "HASHTAG", "ENGAGEMENT", "GROWTH", "POSTS");
    for m in top {
        println!(
            "{:<24}{:>12}{:>9.1}%{:>8}",
            fit(&m.key, 23),
            format_compact(m.total_engagement),
            m.mean_growth_rate,
            m.count
        );
    }
    Ok(())
}

pub(crate) fn run_topics(ctx: &Context, limit: usize) -> anyhow::Result<()> {
    let ranked = rank_topics(&ctx.records)?;
    let top = &ranked[..limit.min(ranked.len())];
    if ctx.json {
        return print_json(top);
    }

    println!("{:<28}{:>8}{:>12}{:>10}", "TOPIC", "POSTS", "ENGAGEMENT", "GROWTH");
    for m in top {
        println!(
            "{:<28}{:>8}{:>12}{:>9.1}%",
            fit(&m.key, 27),
            m.count,
            format_compact(m.total_engagement),
            m.mean_growth_rate
        );
    }
    Ok(())
}

pub(crate) fn run_timeline(ctx: &Context) -> anyhow::Result<()> {
    let timeline = aggregate_timeline(&ctx.records)?;
    if ctx.json {
        return print_json(&timeline);
    }

    println!("{:<12}{:<11}{:>7}", "DATE", "PLATFORM", "VOLUME");
    for p in &timeline {
        println!(
            "{:<12}{:<11}{:>7}",
            p.date.to_string(),
            p.platform.as_str(),
            p.volume
        );
    }
    Ok(())
}

pub(crate) fn run_velocity(ctx: &Context, trend: Option<&str>) -> anyhow::Result<()> {
    let mut rows = trend_velocity(&ctx.records)?;
    if let Some(t) = trend {
        rows.retain(|v| v.trend.eq_ignore_ascii_case(t));
        if rows.is_empty() {
            println!("no records for trend '{t}'");
            return Ok(());
        }
    }
    if ctx.json {
        return print_json(&rows);
    }

    println!("{:<24}{:<12}{:>6}{:>10}", "TREND", "DATE", "POSTS", "CHANGE");
    for v in &rows {
        println!(
            "{:<24}{:<12}{:>6}{:>+9.1}%",
            fit(&v.trend, 23),
            v.date.to_string(),
            v.daily_count,
            v.velocity
        );
    }
    Ok(())
}

pub(crate) fn run_scores(ctx: &Context, limit: usize) -> anyhow::Result<()> {
    let mut scored = trend_scores(&ctx.records)?;
    scored.sort_by(|a, b| b.trend_score.total_cmp(&a.trend_score));
    scored.truncate(limit);
    if ctx.json {
        return print_json(&scored);
    }

    println!(
        "{:<24}{:<11}{:<12}{:>10}{:>7}",
        "TREND", "PLATFORM", "DATE", "ENGAGE", "SCORE"
    );
    for s in &scored {
        println!(
            "{:<24}{:<11}{:<12}{:>10}{:>7.1}",
            fit(&s.record.trend, 23),
            s.record.platform.as_str(),
            s.record.date.to_string(),
            format_compact(s.record.engagement),
            s.trend_score
        );
    }
    Ok(())
}

pub(crate) fn run_history(ctx: &mut Context, trend: &str) -> anyhow::Result<()> {
    let series = historical_series(trend, ctx.days, ctx.today, &mut ctx.rng)?;
    if ctx.json {
        return print_json(&series);
    }

    println!("{trend}: {} days", series.len());
    println!("{:<12}{:>8}", "DATE", "VOLUME");
    for p in &series {
        println!("{:<12}{:>8}", p.date.to_string(), p.volume);
    }
    Ok(())
}

pub(crate) fn run_related(ctx: &Context, trend: &str, limit: usize) -> anyhow::Result<()> {
    let related = related_trends(trend, limit);
    if ctx.json {
        return print_json(&related);
    }

    println!("Related to '{trend}':");
    for name in &related {
        println!("  - {name}");
    }
    Ok(())
}
