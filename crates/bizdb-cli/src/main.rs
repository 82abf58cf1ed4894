//! bizdb — command-line interface for bizdb-core
//!
//! This binary provides a simple way to search the business listings dataset
//! from your terminal. It supports printing dataset statistics, searching
//! hotels and restaurants around a reference point, downloading the dataset,
//! and a prompt-driven interactive session.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ bizdb stats
//!
//! - Hotels with on-site dining within 10 km of the Las Vegas strip
//!   $ bizdb hotels --lat 36.1699 --lon -115.1398 --radius 10
//!
//! - Italian restaurants, nearest first, at most 50 rows
//!   $ bizdb restaurants --cuisine Italian --nearest --limit 50
//!
//! - Download (or refresh) the dataset
//!   $ bizdb fetch
//!
//! - Prompt-driven session
//!   $ bizdb interactive
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the dataset from the data directory bundled
//! with the `bizdb-core` crate and automatically caches a binary version
//! next to it for fast subsequent runs. Use `--input <path>` to point to a
//! custom `.json` / `.json.gz` dataset.
mod args;
mod interactive;
mod logger;
mod output;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use bizdb_core::{BizDb, BizSearch, DefaultBizDb, HotelRule, Query, StandardBackend};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init(args.verbose);

    // Determine input file (default dataset inside bizdb-core's data dir)
    let input_path = args.input.clone().unwrap_or_else(default_input_path);

    match args.command {
        #[cfg(feature = "fetch")]
        Commands::Fetch { url, ttl_secs } => {
            use bizdb_core::DownloadCache;
            use std::time::Duration;

            let url = url.unwrap_or_else(|| BizDb::<StandardBackend>::dataset_url().to_string());
            let mut cache = DownloadCache::new(Duration::from_secs(ttl_secs));
            let dest = cache
                .fetch(&url, &input_path)
                .with_context(|| format!("downloading dataset from {url}"))?;
            println!("Dataset ready at {}", dest.display());
        }

        Commands::Stats => {
            let db = load_db(&input_path)?;
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Businesses: {}", stats.businesses);
            println!("  Hotels with pricing: {}", stats.hotels);
            println!("  Restaurants: {}", stats.restaurants);
        }

        Commands::Hotels {
            lat,
            lon,
            radius,
            limit,
            nearest,
        } => {
            let db = load_db(&input_path)?;
            let query = build_query(lat, lon, radius, None, limit, nearest);
            output::render_hits(&db.hotels_near(&query));
        }

        Commands::Restaurants {
            lat,
            lon,
            radius,
            cuisine,
            limit,
            nearest,
        } => {
            let db = load_db(&input_path)?;
            let query = build_query(lat, lon, radius, cuisine, limit, nearest);
            output::render_hits(&db.restaurants_near(&query));
        }

        Commands::Interactive => {
            let db = load_db(&input_path)?;
            interactive::run(&db)?;
        }
    }

    Ok(())
}

fn default_input_path() -> String {
    let dir = BizDb::<StandardBackend>::default_data_dir();
    dir.join(BizDb::<StandardBackend>::default_dataset_filename())
        .to_string_lossy()
        .to_string()
}

fn load_db(path: &str) -> anyhow::Result<DefaultBizDb> {
    let db = BizDb::<StandardBackend>::load_from_path(path, &HotelRule::default())
        .with_context(|| format!("loading dataset from {path}"))?;
    tracing::debug!(businesses = db.business_count(), "dataset loaded");
    Ok(db)
}

fn build_query(
    lat: f64,
    lon: f64,
    radius: f64,
    cuisine: Option<String>,
    limit: Option<usize>,
    nearest: bool,
) -> Query {
    let mut query = Query::new(lat, lon, radius);
    if let Some(cuisine) = cuisine {
        query = query.with_cuisine(cuisine);
    }
    if let Some(limit) = limit {
        query = query.with_limit(limit);
    }
    if nearest {
        query = query.nearest_first();
    }
    query
}
