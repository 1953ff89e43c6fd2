use rust_decimal::Decimal;
use serde_json::json;

use super::*;

fn sample_product() -> Product {
    serde_json::from_value(json!({
        "id": 123,
        "title": "Test Product",
        "handle": "test-product",
        "vendor": "Acme",
        "product_type": "Shirts",
        "tags": "red blue",
        "variants": [
            {
                "id": 1,
                "price": "24.00",
                "compare_at_price": "30.00",
                "sku": "TP-1",
                "inventory_quantity": 4,
                "option1": "S",
                "option2": "",
                "option3": "Red"
            },
            {"id": 2, "price": "19.99", "compare_at_price": null},
            {"id": 3, "price": ""}
        ],
        "images": [{"id": 9, "src": "https://cdn.example.com/tp.jpg"}],
        "options": [{"name": "Size", "values": ["S", "M"]}]
    }))
    .unwrap()
}

fn render(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn price_range_ignores_unparseable_prices() {
    let range = price_range(&sample_product());
    assert_eq!(range, Some((Decimal::new(1999, 2), Decimal::new(2400, 2))));
}

#[test]
fn price_range_is_none_without_variants() {
    let product: Product = serde_json::from_value(json!({"id": 1})).unwrap();
    assert_eq!(price_range(&product), None);
}

#[test]
fn product_summary_lists_key_fields() {
    let text = render(|out| write_product(out, &sample_product(), Format::Summary));
    assert!(text.contains("Product: Test Product"));
    assert!(text.contains("Vendor: Acme"));
    assert!(text.contains("Price: 24.00"));
    assert!(text.contains("Compare at price: 30.00"));
    assert!(text.contains("Variant: S / Red"));
    assert!(text.contains("SKU: TP-1"));
    assert!(text.contains("Inventory: 4"));
    assert!(text.contains("Price range: 19.99 - 24.00"));
    assert!(text.contains("First image URL: https://cdn.example.com/tp.jpg"));
    assert!(text.contains("  - Size: S, M"));
    assert!(text.contains("Tags: red, blue"));
}

#[test]
fn product_summary_skips_unparseable_compare_at_price() {
    let product: Product = serde_json::from_value(json!({
        "id": 5,
        "variants": [{"id": 1, "price": "10.00", "compare_at_price": ""}]
    }))
    .unwrap();
    let text = render(|out| write_product(out, &product, Format::Summary));
    assert!(text.contains("Price: 10.00"));
    assert!(!text.contains("Compare at price"));
    assert!(!text.contains("Variant:"));
}

#[test]
fn products_json_is_an_array_with_body_html() {
    let text = render(|out| write_products(out, &[sample_product()], Format::Json));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["id"], 123);
    assert_eq!(value[0]["tags"], json!(["red", "blue"]));
    assert!(value[0].get("body_html").is_some());
}

#[test]
fn collections_summary_counts_records() {
    let collections: Vec<Collection> = serde_json::from_value(json!([
        {"id": 1, "title": "Summer", "handle": "summer", "products_count": 3}
    ]))
    .unwrap();
    let text = render(|out| write_collections(out, &collections, Format::Summary));
    assert!(text.starts_with("Found 1 collections"));
    assert!(text.contains("Collection: Summer"));
    assert!(text.contains("Products: 3"));
}
