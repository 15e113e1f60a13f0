//! Per-invocation state: resolved options, the RNG and the filtered records.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use trendscope_analytics::{generate_records, ForecastConfig, PlatformSelection};
use trendscope_core::{load_catalog, AppConfig, IndustryCatalog, RecordFilter, TrendRecord};

use crate::GlobalArgs;

pub(crate) struct Context {
    /// Records left after filtering.
    pub records: Vec<TrendRecord>,
    pub generated: usize,
    pub filter: RecordFilter,
    pub today: NaiveDate,
    pub days: u32,
    pub rng: StdRng,
    pub forecast: ForecastConfig,
    pub json: bool,
}

impl Context {
    /// Resolve CLI flags over config defaults, then generate and filter records.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be loaded or generation fails.
    pub(crate) fn build(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<Self> {
        let days = args.days.unwrap_or(config.default_days);
        let seed = args.seed.or(config.seed);
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading industry catalog");
                load_catalog(path)?
            }
            None => IndustryCatalog::builtin(),
        };

        let today = Local::now().date_naive();
        let selection = PlatformSelection::from(args.platform);
        let all = generate_records(&catalog, selection, days, today, &mut rng)?;

        let filter = RecordFilter {
            platform: args.platform,
            industry: args.industry,
            since: None,
            search: args.search.clone(),
        };
        let records = filter.apply(&all);

        tracing::info!(
            generated = all.len(),
            kept = records.len(),
            days,
            seeded = seed.is_some(),
            "records ready"
        );

        Ok(Self {
            records,
            generated: all.len(),
            filter,
            today,
            days,
            rng,
            forecast: ForecastConfig {
                horizon_days: config.forecast_horizon_days,
                jitter: config.forecast_jitter,
            },
            json: args.json,
        })
    }

    /// Human-readable summary of the active filter.
    pub(crate) fn filter_label(&self) -> String {
        if self.filter.is_empty() {
            return "All records".to_string();
        }
        let mut parts = Vec::new();
        if let Some(p) = self.filter.platform {
            parts.push(format!("platform={p}"));
        }
        if let Some(i) = self.filter.industry {
            parts.push(format!("industry={i}"));
        }
        if let Some(s) = &self.filter.search {
            parts.push(format!("search='{s}'"));
        }
        parts.join(", ")
    }
}
