//! Store domain normalization and endpoint URL assembly.

use reqwest::Url;

use crate::error::CatalogError;

use super::options::Scheme;

/// Strips one leading `https://` or `http://`, then one leading `www.`.
///
/// Given `"https://www.example.com"`, returns `"example.com"`. Normalizing an
/// already-normalized domain returns it unchanged.
#[must_use]
pub fn normalize_domain(domain: &str) -> &str {
    let domain = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    domain.strip_prefix("www.").unwrap_or(domain)
}

/// Builds `{scheme}://{domain}/{segments...}` with each segment
/// percent-encoded.
///
/// An empty `segments` slice yields the store root (`.../`).
pub(super) fn endpoint_url(
    scheme: Scheme,
    domain: &str,
    segments: &[&str],
) -> Result<Url, CatalogError> {
    let host = normalize_domain(domain);
    if host.is_empty() {
        return Err(CatalogError::InvalidDomain {
            domain: domain.to_owned(),
            reason: "domain is empty".to_owned(),
        });
    }

    let mut url =
        Url::parse(&format!("{scheme}://{host}")).map_err(|e| CatalogError::InvalidDomain {
            domain: domain.to_owned(),
            reason: e.to_string(),
        })?;

    if !segments.is_empty() {
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidDomain {
                domain: domain.to_owned(),
                reason: "not a valid URL base".to_owned(),
            })?
            .clear()
            .extend(segments);
    }

    Ok(url)
}
