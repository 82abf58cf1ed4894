use clap::{Parser, Subcommand};

/// CLI arguments for bizdb
#[derive(Debug, Parser)]
#[command(
    name = "bizdb",
    version,
    about = "Find nearby hotels and restaurants from a business listings dataset"
)]
pub struct CliArgs {
    /// Path to the dataset (.json / .json.gz, whole-document or NDJSON)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Verbose loader diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List hotels with on-site dining within a radius
    Hotels {
        /// Reference latitude in degrees
        #[arg(long, default_value_t = 36.1699, allow_negative_numbers = true)]
        lat: f64,

        /// Reference longitude in degrees
        #[arg(long, default_value_t = -115.1398, allow_negative_numbers = true)]
        lon: f64,

        /// Search radius in kilometres (inclusive boundary)
        #[arg(long, default_value_t = 10.0)]
        radius: f64,

        /// Cap the number of rendered matches
        #[arg(long)]
        limit: Option<usize>,

        /// Sort nearest-first instead of dataset order
        #[arg(long)]
        nearest: bool,
    },

    /// List restaurants within a radius, optionally narrowed by cuisine
    Restaurants {
        /// Reference latitude in degrees
        #[arg(long, default_value_t = 36.1699, allow_negative_numbers = true)]
        lat: f64,

        /// Reference longitude in degrees
        #[arg(long, default_value_t = -115.1398, allow_negative_numbers = true)]
        lon: f64,

        /// Search radius in kilometres (inclusive boundary)
        #[arg(long, default_value_t = 10.0)]
        radius: f64,

        /// Cuisine keyword matched against the category text (case-insensitive)
        #[arg(long)]
        cuisine: Option<String>,

        /// Cap the number of rendered matches
        #[arg(long)]
        limit: Option<usize>,

        /// Sort nearest-first instead of dataset order
        #[arg(long)]
        nearest: bool,
    },

    /// Download the dataset, reusing a recent download within the expiry window
    #[cfg(feature = "fetch")]
    Fetch {
        /// Source URL (default: the bundled dataset location)
        #[arg(long)]
        url: Option<String>,

        /// Reuse window for repeated fetches, in seconds
        #[arg(long, default_value_t = 3600)]
        ttl_secs: u64,
    },

    /// Prompt-driven search session
    Interactive,
}
