//! Typed client for the public, unauthenticated catalog JSON endpoints of
//! hosted storefronts (`products.json`, `collections.json`, search
//! suggestions).

pub mod client;
pub mod error;
pub mod types;

pub use client::{
    normalize_domain, with_max_pages, with_page_delay, with_page_size, with_scheme, with_timeout,
    with_user_agent, CatalogClient, ClientConfig, ClientOption, Scheme,
};
pub use error::CatalogError;
pub use types::{Collection, Image, Product, ProductOption, Variant};
