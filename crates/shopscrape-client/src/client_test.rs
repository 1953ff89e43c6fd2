use std::time::Duration;

use super::*;

#[test]
fn normalize_domain_strips_scheme_and_www() {
    assert_eq!(normalize_domain("https://www.example.com"), "example.com");
    assert_eq!(normalize_domain("http://example.com"), "example.com");
    assert_eq!(normalize_domain("www.example.com"), "example.com");
    assert_eq!(normalize_domain("example.com"), "example.com");
}

#[test]
fn normalize_domain_is_idempotent() {
    for input in ["https://www.example.com", "http://shop.example.com", "www.example.com"] {
        let once = normalize_domain(input);
        assert_eq!(normalize_domain(once), once, "not idempotent for {input}");
    }
}

#[test]
fn normalize_domain_strips_at_most_one_prefix_of_each_kind() {
    assert_eq!(normalize_domain("www.www.example.com"), "www.example.com");
    assert_eq!(
        normalize_domain("https://https://example.com"),
        "https://example.com"
    );
}

#[test]
fn normalize_domain_only_strips_from_the_front() {
    assert_eq!(normalize_domain("shop.www.example.com"), "shop.www.example.com");
    assert_eq!(normalize_domain("example.com/https://"), "example.com/https://");
}

#[test]
fn defaults_hold_without_options() {
    let config = ClientConfig::from_options(Vec::new());
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    assert!(config.user_agent().starts_with("Mozilla/5.0"));
    assert_eq!(config.page_size(), 250);
    assert_eq!(config.page_delay(), Duration::from_millis(100));
    assert_eq!(config.scheme(), Scheme::Https);
    assert_eq!(config.max_pages(), None);
}

#[test]
fn options_set_exactly_their_fields() {
    let client = CatalogClient::new(vec![
        with_timeout(Duration::from_secs(5)),
        with_user_agent("test-agent"),
        with_page_size(50),
    ])
    .unwrap();

    let expected = ClientConfig {
        timeout: Duration::from_secs(5),
        user_agent: "test-agent".to_owned(),
        page_size: 50,
        ..ClientConfig::default()
    };
    assert_eq!(client.config(), &expected);
}

#[test]
fn page_size_is_clamped_to_platform_maximum() {
    let config = ClientConfig::from_options(vec![with_page_size(300)]);
    assert_eq!(config.page_size(), MAX_PAGE_SIZE);
}

#[test]
fn later_options_win() {
    let config = ClientConfig::from_options(vec![with_page_size(10), with_page_size(20)]);
    assert_eq!(config.page_size(), 20);
}

#[test]
fn endpoint_url_builds_from_bare_or_prefixed_domain() {
    let url = endpoint_url(Scheme::Https, "https://www.example.com", &["products.json"]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/products.json");

    let url = endpoint_url(Scheme::Https, "example.com", &[]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/");
}

#[test]
fn endpoint_url_uses_configured_scheme() {
    let url = endpoint_url(Scheme::Http, "127.0.0.1:8080", &["collections.json"]).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/collections.json");
}

#[test]
fn endpoint_url_encodes_handle_segments() {
    let url = endpoint_url(
        Scheme::Https,
        "example.com",
        &["collections", "summer sale", "products.json"],
    )
    .unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/collections/summer%20sale/products.json"
    );
}

#[test]
fn endpoint_url_rejects_empty_domain() {
    let err = endpoint_url(Scheme::Https, "https://www.", &["products.json"]).unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidDomain { .. }),
        "expected InvalidDomain, got: {err:?}"
    );
}

#[test]
fn endpoint_url_rejects_unparseable_domain() {
    let err = endpoint_url(Scheme::Https, "exa mple.com", &["products.json"]).unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidDomain { .. }),
        "expected InvalidDomain, got: {err:?}"
    );
}

#[test]
fn excerpt_truncates_long_bodies_on_char_boundary() {
    let body = "é".repeat(BODY_EXCERPT_CHARS + 10);
    let cut = excerpt(&body);
    assert_eq!(cut.chars().count(), BODY_EXCERPT_CHARS + 1);
    assert!(cut.ends_with('…'));
}

#[test]
fn excerpt_keeps_short_bodies() {
    assert_eq!(excerpt("Not Found"), "Not Found");
}
