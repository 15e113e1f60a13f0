mod context;
mod forecast;
mod output;
mod recommend;
mod report;
mod sentiment;
mod trends;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trendscope_analytics::AnalyticsError;
use trendscope_core::{Industry, Platform};
use trendscope_sentiment::SentimentError;

use crate::context::Context;

#[derive(Debug, Parser)]
#[command(name = "trendscope")]
#[command(about = "Social media trend aggregation and forecasting")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Filters and run options shared by every command.
#[derive(Debug, Clone, Args)]
struct GlobalArgs {
    /// Only generate and keep records for this platform
    #[arg(long, global = true)]
    platform: Option<Platform>,

    /// Only keep records for this industry
    #[arg(long, global = true)]
    industry: Option<Industry>,

    /// Days of history to generate (defaults to TRENDSCOPE_DAYS)
    #[arg(long, global = true)]
    days: Option<u32>,

    /// RNG seed for reproducible output (defaults to TRENDSCOPE_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Case-insensitive match on trend, topic or hashtag
    #[arg(long, global = true)]
    search: Option<String>,

    /// Print JSON instead of a text table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Print the generated records
    Generate {
        /// Maximum number of records to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Rank hashtags by total engagement
    Hashtags {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Rank topics by record count
    Topics {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Record volume per day and platform
    Timeline,
    /// Sentiment distribution and keywords
    Sentiment {
        /// Also break the distribution down by industry
        #[arg(long)]
        by_industry: bool,
    },
    /// Project volume for each trend over the forecast horizon
    Forecast {
        /// Only show this trend
        #[arg(long)]
        trend: Option<String>,
    },
    /// Templated content recommendations
    Recommend {
        /// Narrow recommendations to --industry / --platform
        #[arg(long)]
        custom: bool,
    },
    /// Day-over-day change in record volume per trend
    Velocity {
        /// Only show this trend
        #[arg(long)]
        trend: Option<String>,
    },
    /// Composite trend scores, highest first
    Scores {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Simulated daily volume history for one trend
    History {
        #[arg(long)]
        trend: String,
    },
    /// Trends related to one trend
    Related {
        #[arg(long)]
        trend: String,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Markdown summary of every stage
    Report,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("no command given; run `trendscope --help` for usage");
        return Ok(());
    };

    let config = trendscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, ?command, "starting");
    let mut ctx = Context::build(&cli.global, &config)?;

    match run(&command, &mut ctx) {
        Err(e) if is_no_data(&e) => {
            println!("no data to show: {e}");
            Ok(())
        }
        other => other,
    }
}

fn run(command: &Commands, ctx: &mut Context) -> anyhow::Result<()> {
    match command {
        Commands::Generate { limit } => trends::run_generate(ctx, *limit),
        Commands::Hashtags { limit } => trends::run_hashtags(ctx, *limit),
        Commands::Topics { limit } => trends::run_topics(ctx, *limit),
        Commands::Timeline => trends::run_timeline(ctx),
        Commands::Sentiment { by_industry } => sentiment::run_sentiment(ctx, *by_industry),
        Commands::Forecast { trend } => forecast::run_forecast(ctx, trend.as_deref()),
        Commands::Recommend { custom } => recommend::run_recommend(ctx, *custom),
        Commands::Velocity { trend } => trends::run_velocity(ctx, trend.as_deref()),
        Commands::Scores { limit } => trends::run_scores(ctx, *limit),
        Commands::History { trend } => trends::run_history(ctx, trend),
        Commands::Related { trend, limit } => trends::run_related(ctx, trend, *limit),
        Commands::Report => report::run_report(ctx),
    }
}

/// Whether `err` is the pipeline's empty-input signal rather than a failure.
fn is_no_data(err: &anyhow::Error) -> bool {
    if let Some(e) = err.downcast_ref::<AnalyticsError>() {
        return e.is_no_data();
    }
    matches!(
        err.downcast_ref::<SentimentError>(),
        Some(SentimentError::NoData { .. })
    )
}
