use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mealbot::{Config, MCPServer, tools};

/// MCP server for recipe and nutrition lookups
#[derive(Parser, Debug)]
#[command(name = "mealbot", version)]
struct Args {
    /// Base URL of TheMealDB API
    #[arg(long, env = "MEALDB_BASE_URL", default_value = mealbot::config::DEFAULT_MEALDB_BASE_URL)]
    mealdb_base_url: String,

    /// Base URL of the FoodData Central API
    #[arg(long, env = "FOODDATA_BASE_URL", default_value = mealbot::config::DEFAULT_FOODDATA_BASE_URL)]
    fooddata_base_url: String,

    /// FoodData Central API key
    #[arg(long, env = "FOODDATA_API_KEY", hide_env_values = true)]
    fooddata_api_key: Option<String>,

    /// Legacy name for the FoodData Central API key
    #[arg(long, env = "USDA_API_KEY", hide = true, hide_env_values = true)]
    usda_api_key: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "mealbot=info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Config {
        let config = Config::new()
            .with_mealdb_base_url(self.mealdb_base_url)
            .with_fooddata_base_url(self.fooddata_base_url);
        let set = |key: &String| !key.is_empty();
        match self.fooddata_api_key.filter(set).or(self.usda_api_key.filter(set)) {
            Some(key) => config.with_fooddata_api_key(key),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.into_config();
    if config.fooddata_api_key.is_none() {
        tracing::warn!("No FoodData Central API key configured; nutrition lookups will be rejected upstream");
    }

    MCPServer::new(tools::registry(&config))
        .serve_stdio()
        .await
        .context("MCP server failed")?;

    Ok(())
}
