use shopscrape_core::AppConfig;

use super::*;

#[test]
fn parses_products_command() {
    let cli = Cli::try_parse_from(["shopscrape", "products", "example.com"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Products { ref domain } if domain == "example.com"
    ));
    assert!(!cli.json);
    assert_eq!(cli.overrides, ClientOverrides::default());
}

#[test]
fn parses_product_command_with_handle() {
    let cli = Cli::try_parse_from(["shopscrape", "product", "example.com", "test-product"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Product { ref domain, ref handle }
            if domain == "example.com" && handle == "test-product"
    ));
}

#[test]
fn parses_collection_products_command() {
    let cli = Cli::try_parse_from(["shopscrape", "collection-products", "example.com", "summer"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::CollectionProducts { ref handle, .. } if handle == "summer"
    ));
}

#[test]
fn parses_search_with_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "shopscrape",
        "search",
        "example.com",
        "red shirt",
        "--json",
        "--page-size",
        "50",
        "--max-pages",
        "3",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Search { ref query, .. } if query == "red shirt"
    ));
    assert!(cli.json);
    assert_eq!(cli.overrides.page_size, Some(50));
    assert_eq!(cli.overrides.max_pages, Some(3));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["shopscrape"]).is_err());
}

#[test]
fn product_command_requires_handle() {
    assert!(Cli::try_parse_from(["shopscrape", "product", "example.com"]).is_err());
}

#[test]
fn overrides_take_precedence_over_config() {
    let config = AppConfig {
        request_timeout_secs: 10,
        page_size: 100,
        page_delay_ms: 0,
        user_agent: Some("from-env".to_owned()),
        ..AppConfig::default()
    };
    let overrides = ClientOverrides {
        timeout_secs: Some(5),
        page_size: Some(400),
        user_agent: Some("from-flag".to_owned()),
        max_pages: None,
    };

    let client = catalog::build_client(&config, &overrides).expect("client should build");
    let resolved = client.config();
    assert_eq!(resolved.timeout(), std::time::Duration::from_secs(5));
    assert_eq!(resolved.page_size(), 250, "page size is clamped");
    assert_eq!(resolved.user_agent(), "from-flag");
    assert_eq!(resolved.page_delay(), std::time::Duration::ZERO);
    assert_eq!(resolved.max_pages(), None);
}

#[test]
fn config_values_apply_without_overrides() {
    let config = AppConfig {
        max_pages: Some(7),
        ..AppConfig::default()
    };
    let client = catalog::build_client(&config, &ClientOverrides::default()).unwrap();
    assert_eq!(client.config().max_pages(), Some(7));
    assert_eq!(
        client.config().user_agent(),
        shopscrape_client::client::DEFAULT_USER_AGENT
    );
}
