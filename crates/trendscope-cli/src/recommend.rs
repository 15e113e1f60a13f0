//! Recommendation listing.

use trendscope_analytics::{custom_recommendations, generate_recommendations};
use trendscope_core::{format_compact, Recommendation};

use crate::context::Context;
use crate::output::print_json;

pub(crate) fn run_recommend(ctx: &Context, custom: bool) -> anyhow::Result<()> {
    if custom {
        let recs =
            custom_recommendations(&ctx.records, ctx.filter.industry, ctx.filter.platform);
        if ctx.json {
            return print_json(&recs);
        }
        if recs.is_empty() {
            println!("no custom recommendations for {}", ctx.filter_label());
            return Ok(());
        }
        println!("## Custom ({})", ctx.filter_label());
        print_recommendations(&recs);
        return Ok(());
    }

    let set = generate_recommendations(&ctx.records)?;
    if ctx.json {
        return print_json(&set);
    }
    for (category, recs) in set.iter() {
        println!("## {category}");
        print_recommendations(recs);
    }
    Ok(())
}

fn print_recommendations(recs: &[Recommendation]) {
    for rec in recs {
        println!();
        println!("### {}", rec.title);
        println!("{}", rec.description);
        for (i, step) in rec.action_steps.iter().enumerate() {
            println!("{}. {step}", i + 1);
        }
        println!(
            "relevance {}/10 | reach {} | effort {}/10",
            rec.metrics.relevance,
            format_compact(rec.metrics.potential_reach),
            rec.metrics.effort
        );
    }
    println!();
}
