//! Page-numbered listing loop shared by `get_products` and
//! `get_collection_products`.

use reqwest::Url;

use crate::error::CatalogError;
use crate::types::{Product, ProductsPage};

use super::CatalogClient;

impl CatalogClient {
    /// Walks `?limit={page_size}&page={n}` from page 1 until a page decodes
    /// to zero products, returning everything collected in server order.
    ///
    /// An empty page is the only termination signal. The configured page
    /// delay is slept between requests, never before the first one.
    ///
    /// **All-or-nothing semantics**: on any page failure, products from
    /// earlier pages are dropped and only the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_json`]. Returns
    /// [`CatalogError::PaginationLimit`] if a page ceiling is configured and
    /// the listing has not ended within it.
    pub(super) async fn fetch_all_pages(
        &self,
        listing_url: Url,
        referer: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let limit = self.config.page_size.to_string();
        let mut all_products: Vec<Product> = Vec::new();
        let mut page = 1usize;

        loop {
            if let Some(max_pages) = self.config.max_pages {
                if page > max_pages {
                    return Err(CatalogError::PaginationLimit {
                        url: listing_url.into(),
                        max_pages,
                    });
                }
            }

            let mut url = listing_url.clone();
            url.query_pairs_mut()
                .append_pair("limit", &limit)
                .append_pair("page", &page.to_string());

            let response: ProductsPage = self
                .fetch_json(url, referer, &format!("products page {page}"))
                .await?;

            if response.products.is_empty() {
                break;
            }

            tracing::debug!(
                page,
                count = response.products.len(),
                "decoded product page"
            );
            all_products.extend(response.products);
            page += 1;

            if !self.config.page_delay.is_zero() {
                tokio::time::sleep(self.config.page_delay).await;
            }
        }

        tracing::info!(
            listing = %listing_url,
            pages = page - 1,
            products = all_products.len(),
            "paginated fetch complete"
        );
        Ok(all_products)
    }
}
