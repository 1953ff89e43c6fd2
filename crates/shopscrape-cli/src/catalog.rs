//! Command handlers: build the client from config and run one operation.

use std::time::Duration;

use shopscrape_client::{
    with_max_pages, with_page_delay, with_page_size, with_timeout, with_user_agent,
    CatalogClient, ClientOption,
};
use shopscrape_core::AppConfig;

use crate::output::{self, Format};
use crate::{ClientOverrides, Commands};

/// Translates config plus command-line overrides into client options.
///
/// Command-line values are applied after config values so they win.
pub(crate) fn client_options(config: &AppConfig, overrides: &ClientOverrides) -> Vec<ClientOption> {
    let mut options = vec![
        with_timeout(Duration::from_secs(config.request_timeout_secs)),
        with_page_size(config.page_size),
        with_page_delay(Duration::from_millis(config.page_delay_ms)),
    ];
    if let Some(ua) = &config.user_agent {
        options.push(with_user_agent(ua.clone()));
    }
    if let Some(max_pages) = config.max_pages {
        options.push(with_max_pages(max_pages));
    }

    if let Some(secs) = overrides.timeout_secs {
        options.push(with_timeout(Duration::from_secs(secs)));
    }
    if let Some(size) = overrides.page_size {
        options.push(with_page_size(size));
    }
    if let Some(ua) = &overrides.user_agent {
        options.push(with_user_agent(ua.clone()));
    }
    if let Some(max_pages) = overrides.max_pages {
        options.push(with_max_pages(max_pages));
    }
    options
}

/// Builds the catalog client for this invocation.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub(crate) fn build_client(
    config: &AppConfig,
    overrides: &ClientOverrides,
) -> anyhow::Result<CatalogClient> {
    let client = CatalogClient::new(client_options(config, overrides))?;
    tracing::debug!(config = ?client.config(), "catalog client ready");
    Ok(client)
}

/// Runs `command` and writes its result to stdout.
///
/// # Errors
///
/// Returns the client error of the failed operation, or an I/O or
/// serialization error while writing output.
pub(crate) async fn run(
    client: &CatalogClient,
    command: Commands,
    format: Format,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    match command {
        Commands::Products { domain } => {
            tracing::info!(%domain, "fetching all products");
            let products = client.get_products(&domain).await?;
            output::write_products(&mut stdout, &products, format)?;
        }
        Commands::Product { domain, handle } => {
            tracing::info!(%domain, %handle, "fetching product");
            let product = client.get_product(&domain, &handle).await?;
            output::write_product(&mut stdout, &product, format)?;
        }
        Commands::Collections { domain } => {
            tracing::info!(%domain, "fetching collections");
            let collections = client.get_collections(&domain).await?;
            output::write_collections(&mut stdout, &collections, format)?;
        }
        Commands::CollectionProducts { domain, handle } => {
            tracing::info!(%domain, %handle, "fetching collection products");
            let products = client.get_collection_products(&domain, &handle).await?;
            output::write_products(&mut stdout, &products, format)?;
        }
        Commands::Search { domain, query } => {
            tracing::info!(%domain, %query, "searching products");
            let products = client.search_products(&domain, &query).await?;
            output::write_products(&mut stdout, &products, format)?;
        }
    }
    Ok(())
}
