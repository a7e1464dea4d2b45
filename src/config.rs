use clap::Parser;

use crate::clock::Zone;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "promo-gate")]
#[command(about = "Promotional landing page server with per-client rate limiting")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    // Public hostname used in robots.txt and the sitemap
    #[arg(long, env = "DOMAIN", default_value = "example.com")]
    pub domain: String,

    // Rate limit max page requests per window
    #[arg(long, env = "MAX_REQUESTS", default_value_t = 50)]
    pub max_requests: u32,

    // Rate limit window in seconds
    #[arg(long, env = "PER_SECONDS", default_value_t = 3600)]
    pub per_seconds: u64,

    // Zone for the daily reset and displayed times: "local", "utc" or "+03:00"
    #[arg(long = "utc-offset", env = "UTC_OFFSET", default_value = "local")]
    pub zone: Zone,

    // Seconds between sweeps of idle identities, 0 disables
    #[arg(long, env = "SWEEP_INTERVAL", default_value_t = 300)]
    pub sweep_interval: u64,

    // Default log filter, RUST_LOG overrides it
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
