//! Forecast table.

use trendscope_analytics::forecast_trends;

use crate::context::Context;
use crate::output::{fit, print_json};

pub(crate) fn run_forecast(ctx: &mut Context, trend: Option<&str>) -> anyhow::Result<()> {
    let mut points = forecast_trends(&ctx.records, &ctx.forecast, &mut ctx.rng)?;
    if let Some(t) = trend {
        points.retain(|p| p.trend.eq_ignore_ascii_case(t));
        if points.is_empty() {
            println!("no records for trend '{t}'");
            return Ok(());
        }
    }
    if ctx.json {
        return print_json(&points);
    }

    println!(
        "{:<24}{:<12}{:>10}{:<2}{:<12}{:>10}{:>9}",
        "TREND", "LATEST", "AVG", "", "FORECAST", "VOLUME", "GROWTH"
    );
    for p in &points {
        println!(
            "{:<24}{:<12}{:>10.0}{:<2}{:<12}{:>10}{:>8.1}%",
            fit(&p.trend, 23),
            p.anchor_date.to_string(),
            p.anchor_volume,
            "",
            p.forecast_date.to_string(),
            p.forecast_volume,
            p.growth_forecast_pct
        );
    }
    Ok(())
}
