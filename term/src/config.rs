//! Command-line and environment configuration.

use clap::Parser;
use cocktail_core::DEFAULT_BASE_URL;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "cocktail", version, about = "Search TheCocktailDB from the terminal")]
pub struct Config {
    /// API root that `search.php` hangs off.
    #[arg(long, env = "COCKTAIL_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log debug output to stderr.
    #[arg(short, long)]
    pub debug: bool,

    /// Search for this term right away.
    pub term: Option<String>,
}

impl Config {
    /// `RUST_LOG` wins when set; otherwise `--debug` picks the level.
    pub fn log_filter(&self) -> EnvFilter {
        let fallback = if self.debug { "debug" } else { "warn" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}
