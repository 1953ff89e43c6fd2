//! HTTP client for a storefront's public catalog JSON endpoints.

mod domain;
mod options;
mod paginate;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::types::{Collection, CollectionsResponse, Product, ProductEnvelope, SearchResponse};

pub use domain::normalize_domain;
pub use options::{
    with_max_pages, with_page_delay, with_page_size, with_scheme, with_timeout, with_user_agent,
    ClientConfig, ClientOption, Scheme, DEFAULT_PAGE_DELAY, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
    MAX_PAGE_SIZE,
};

use domain::endpoint_url;

/// Number of body characters kept in error values.
pub(super) const BODY_EXCERPT_CHARS: usize = 512;

/// Client for a storefront's unauthenticated catalog endpoints.
///
/// Holds only immutable configuration and a connection pool, so one client
/// can serve any number of independent calls. Every non-2xx status and every
/// undecodable body is a hard failure; nothing is retried.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(super) client: Client,
    pub(super) config: ClientConfig,
}

impl CatalogClient {
    /// Creates a client from an ordered list of options applied over the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config or header value).
    pub fn new<I>(options: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let config = ClientConfig::from_options(options);
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches every product in the store, page by page.
    ///
    /// # Errors
    ///
    /// Propagates any page failure; products from earlier pages are discarded.
    /// See [`Self::get_collection_products`] for the full list.
    pub async fn get_products(&self, domain: &str) -> Result<Vec<Product>, CatalogError> {
        let url = endpoint_url(self.config.scheme, domain, &["products.json"])?;
        let referer = endpoint_url(self.config.scheme, domain, &[])?;
        self.fetch_all_pages(url, referer.as_str()).await
    }

    /// Fetches a single product by handle.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] — non-2xx, including 404 for an
    ///   unknown handle.
    /// - [`CatalogError::Http`] — network, TLS, or timeout failure.
    /// - [`CatalogError::Deserialize`] — body is not a `{"product": {...}}` object.
    /// - [`CatalogError::InvalidDomain`] — `domain` cannot form a URL.
    pub async fn get_product(&self, domain: &str, handle: &str) -> Result<Product, CatalogError> {
        let file = format!("{handle}.json");
        let url = endpoint_url(self.config.scheme, domain, &["products", file.as_str()])?;
        let referer = endpoint_url(self.config.scheme, domain, &["products", handle])?;

        let envelope: ProductEnvelope = self
            .fetch_json(url, referer.as_str(), &format!("product {handle}"))
            .await?;
        Ok(envelope.product)
    }

    /// Fetches the store's collections. Not paginated.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`Self::get_product`].
    pub async fn get_collections(&self, domain: &str) -> Result<Vec<Collection>, CatalogError> {
        let url = endpoint_url(self.config.scheme, domain, &["collections.json"])?;
        let referer = endpoint_url(self.config.scheme, domain, &[])?;

        let response: CollectionsResponse = self
            .fetch_json(url, referer.as_str(), "collections")
            .await?;
        Ok(response.collections)
    }

    /// Fetches every product in one collection, page by page.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] — any page answered non-2xx.
    /// - [`CatalogError::Http`] — network, TLS, or timeout failure.
    /// - [`CatalogError::Deserialize`] — a page is not `{"products": [...]}`.
    /// - [`CatalogError::PaginationLimit`] — a configured page ceiling was hit.
    /// - [`CatalogError::InvalidDomain`] — `domain` cannot form a URL.
    pub async fn get_collection_products(
        &self,
        domain: &str,
        handle: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let url = endpoint_url(
            self.config.scheme,
            domain,
            &["collections", handle, "products.json"],
        )?;
        let referer = endpoint_url(self.config.scheme, domain, &["collections", handle])?;
        self.fetch_all_pages(url, referer.as_str()).await
    }

    /// Searches products through the storefront's suggestion endpoint.
    ///
    /// Returns an empty list when the response carries no
    /// `resources.results.products`.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`Self::get_product`].
    pub async fn search_products(
        &self,
        domain: &str,
        query: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let mut url = endpoint_url(self.config.scheme, domain, &["search", "suggest.json"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("resources[type]", "product");

        let mut referer = endpoint_url(self.config.scheme, domain, &["search"])?;
        referer.query_pairs_mut().append_pair("q", query);

        let response: SearchResponse = self
            .fetch_json(url, referer.as_str(), &format!("search \"{query}\""))
            .await?;
        Ok(response.into_products())
    }

    /// Issues one GET with the browser-like header set, checks the status,
    /// and decodes the body as `T`.
    pub(super) async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: Url,
        referer: &str,
        context: &str,
    ) -> Result<T, CatalogError> {
        tracing::debug!(%url, referer, "requesting catalog endpoint");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::REFERER, referer)
            .header("Sec-Fetch-Dest", "empty")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Site", "same-origin")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is diagnostic only; a failed read leaves it empty.
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                %url,
                status = status.as_u16(),
                "catalog endpoint returned non-success status"
            );
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.into(),
                body: excerpt(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: format!("{context} from {url}"),
            body: excerpt(&body),
            source: e,
        })
    }
}

/// First [`BODY_EXCERPT_CHARS`] characters of `body`, cut on a char boundary.
fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_owned(),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
