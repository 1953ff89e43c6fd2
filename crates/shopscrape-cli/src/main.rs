mod catalog;
mod output;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopscrape")]
#[command(about = "Fetch catalog data from a storefront's public JSON endpoints")]
struct Cli {
    #[command(flatten)]
    overrides: ClientOverrides,

    /// Print decoded records as pretty JSON instead of a summary.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Per-invocation overrides of the `SHOPSCRAPE_*` settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Args)]
struct ClientOverrides {
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[arg(long, global = true)]
    page_size: Option<u32>,

    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Fail instead of requesting more than this many pages.
    #[arg(long, global = true)]
    max_pages: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product in the store.
    Products { domain: String },
    /// Show one product by handle.
    Product { domain: String, handle: String },
    /// List the store's collections.
    Collections { domain: String },
    /// List every product in one collection.
    CollectionProducts { domain: String, handle: String },
    /// Search products by free text.
    Search { domain: String, query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = shopscrape_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = catalog::build_client(&config, &cli.overrides)?;
    let format = if cli.json {
        output::Format::Json
    } else {
        output::Format::Summary
    };

    catalog::run(&client, cli.command, format).await
}

#[cfg(test)]
mod tests;
