//! Storefront catalog types for the public JSON endpoints.
//!
//! ## Observed shapes
//!
//! ### Tags
//! `products.json` returns tags as a **JSON array of strings**, while
//! `products/{handle}.json` returns them as one string. A string is split on
//! whitespace only, so the comma-space form (`"red, blue"`) keeps its commas
//! (`["red,", "blue"]`). `null` or a missing field decodes to an empty list.
//!
//! ### Prices
//! `price` and `compare_at_price` are decimal strings (`"19.99"`). They are
//! kept verbatim and only parsed on demand into [`Decimal`], never into `f64`.
//! `compare_at_price` is `null` when the variant is not on sale.
//!
//! ### Description
//! The wire name is `body_html`; it carries raw HTML and may be `null`.
//!
//! ### Search suggestions
//! `search/suggest.json` returns trimmed-down products (no `body_html`, few
//! variant fields), so nearly every field here falls back to a default.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope of `GET /products.json` and
/// `GET /collections/{handle}/products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
}

/// Response envelope of `GET /products/{handle}.json`.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

/// Response envelope of `GET /collections.json`.
#[derive(Debug, Deserialize)]
pub struct CollectionsResponse {
    pub collections: Vec<Collection>,
}

/// Response envelope of `GET /search/suggest.json`.
///
/// Every level is optional: a store with no matches may omit `resources`
/// or `results` entirely.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub resources: Option<SearchResources>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResources {
    #[serde(default)]
    pub results: Option<SearchResults>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl SearchResponse {
    /// Flattens `resources.results.products`, yielding an empty list when any
    /// level is absent.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.resources
            .and_then(|r| r.results)
            .map(|r| r.products)
            .unwrap_or_default()
    }
}

/// A product as exposed by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Platform-assigned product ID (e.g., `6789012345678`).
    pub id: u64,

    #[serde(default)]
    pub title: String,

    /// URL slug for the product page (e.g., `"test-product"`).
    #[serde(default)]
    pub handle: String,

    /// Raw HTML description. Sent as `body_html`.
    #[serde(default, rename = "body_html")]
    pub description: Option<String>,

    #[serde(default)]
    pub vendor: Option<String>,

    #[serde(default)]
    pub product_type: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub published_at: Option<DateTime<FixedOffset>>,

    /// Normalized tag list; see the module docs for the accepted wire forms.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub variants: Vec<Variant>,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub options: Vec<ProductOption>,
}

/// A purchasable configuration of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: u64,

    /// Owning product. Absent from search suggestions.
    #[serde(default)]
    pub product_id: Option<u64>,

    /// `"Default Title"` for single-variant products.
    #[serde(default)]
    pub title: String,

    /// Current price as a decimal string (e.g., `"19.99"`).
    #[serde(default)]
    pub price: String,

    /// Pre-sale price as a decimal string, or `None` when not on sale.
    #[serde(default)]
    pub compare_at_price: Option<String>,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub barcode: Option<String>,

    /// 1-based position; `1` is the storefront-default variant.
    #[serde(default)]
    pub position: Option<u32>,

    /// May be negative when overselling is allowed.
    #[serde(default)]
    pub inventory_quantity: Option<i64>,

    /// `"shopify"` when tracked, `null` when not.
    #[serde(default)]
    pub inventory_management: Option<String>,

    #[serde(default)]
    pub fulfillment_service: Option<String>,

    #[serde(default)]
    pub grams: Option<i64>,

    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default)]
    pub weight_unit: Option<String>,

    #[serde(default)]
    pub option1: Option<String>,

    #[serde(default)]
    pub option2: Option<String>,

    #[serde(default)]
    pub option3: Option<String>,

    #[serde(default)]
    pub taxable: bool,

    #[serde(default)]
    pub requires_shipping: bool,

    /// Defaults to `true` when absent.
    #[serde(default = "default_available")]
    pub available: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Variant {
    /// Parses [`Self::price`] as an exact decimal.
    ///
    /// Returns `None` for an empty or malformed price string.
    #[must_use]
    pub fn price_amount(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    /// Parses [`Self::compare_at_price`] as an exact decimal.
    #[must_use]
    pub fn compare_at_amount(&self) -> Option<Decimal> {
        self.compare_at_price.as_deref().and_then(parse_decimal)
    }

    /// Non-empty option values (`option1..option3`) in slot order.
    pub fn option_values(&self) -> impl Iterator<Item = &str> {
        [&self.option1, &self.option2, &self.option3]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.is_empty())
    }
}

/// A product or collection image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Collection images carry no ID.
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub product_id: Option<u64>,

    /// 1-based image position.
    #[serde(default)]
    pub position: Option<u32>,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    /// Canonical CDN URL.
    #[serde(default)]
    pub src: String,

    #[serde(default)]
    pub alt: Option<String>,

    /// Variants this image is shown for.
    #[serde(default)]
    pub variant_ids: Vec<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A selectable product dimension such as `"Size"` or `"Color"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub product_id: Option<u64>,

    pub name: String,

    #[serde(default)]
    pub position: Option<u32>,

    #[serde(default)]
    pub values: Vec<String>,
}

/// A storefront collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub handle: String,

    #[serde(default, rename = "body_html")]
    pub description: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// Representative image, if one is set.
    #[serde(default)]
    pub image: Option<Image>,

    #[serde(default)]
    pub products_count: Option<u64>,
}

/// Default value for `Variant::available` when the field is absent.
fn default_available() -> bool {
    true
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw).ok()
}

/// Decodes the `tags` field from either a space-delimited string or a list of
/// strings. `null` yields an empty list.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        Delimited(String),
        List(Vec<String>),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::Delimited(raw)) => raw.split_whitespace().map(str::to_owned).collect(),
        Some(Tags::List(tags)) => tags,
        None => Vec::new(),
    })
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
