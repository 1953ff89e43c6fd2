//! Rendering of decoded catalog records for the terminal.

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;
use shopscrape_client::{Collection, Product};

const SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Summary,
    Json,
}

pub(crate) fn write_products<W: Write>(
    out: &mut W,
    products: &[Product],
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Json => write_json(out, products),
        Format::Summary => {
            writeln!(out, "Found {} products", products.len())?;
            for product in products {
                writeln!(out)?;
                write_product_summary(out, product)?;
            }
            Ok(())
        }
    }
}

pub(crate) fn write_product<W: Write>(
    out: &mut W,
    product: &Product,
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Json => write_json(out, product),
        Format::Summary => write_product_summary(out, product),
    }
}

pub(crate) fn write_collections<W: Write>(
    out: &mut W,
    collections: &[Collection],
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Json => write_json(out, collections),
        Format::Summary => {
            writeln!(out, "Found {} collections", collections.len())?;
            for collection in collections {
                writeln!(out)?;
                writeln!(out, "Collection: {}", collection.title)?;
                writeln!(out, "Handle: {}", collection.handle)?;
                if let Some(count) = collection.products_count {
                    writeln!(out, "Products: {count}")?;
                }
                if let Some(image) = &collection.image {
                    writeln!(out, "Image URL: {}", image.src)?;
                }
                writeln!(out, "{SEPARATOR}")?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_product_summary<W: Write>(out: &mut W, product: &Product) -> anyhow::Result<()> {
    writeln!(out, "Product: {}", product.title)?;
    writeln!(out, "Handle: {}", product.handle)?;
    writeln!(out, "Vendor: {}", product.vendor.as_deref().unwrap_or(""))?;
    writeln!(out, "Type: {}", product.product_type.as_deref().unwrap_or(""))?;

    if let Some(variant) = product.variants.first() {
        writeln!(out, "Price: {}", variant.price)?;
        if let Some(compare_at) = variant.compare_at_amount() {
            writeln!(out, "Compare at price: {compare_at}")?;
        }
        let selection: Vec<&str> = variant.option_values().collect();
        if !selection.is_empty() {
            writeln!(out, "Variant: {}", selection.join(" / "))?;
        }
        writeln!(out, "SKU: {}", variant.sku.as_deref().unwrap_or(""))?;
        if let Some(quantity) = variant.inventory_quantity {
            writeln!(out, "Inventory: {quantity}")?;
        }
    }

    if let Some((low, high)) = price_range(product) {
        if low == high {
            writeln!(out, "Price range: {low}")?;
        } else {
            writeln!(out, "Price range: {low} - {high}")?;
        }
    }

    if let Some(image) = product.images.first() {
        writeln!(out, "First image URL: {}", image.src)?;
    }

    if !product.options.is_empty() {
        writeln!(out, "Options:")?;
        for option in &product.options {
            writeln!(out, "  - {}: {}", option.name, option.values.join(", "))?;
        }
    }

    writeln!(out, "Tags: {}", product.tags.join(", "))?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Lowest and highest variant price, skipping unparseable prices.
fn price_range(product: &Product) -> Option<(Decimal, Decimal)> {
    let mut prices = product.variants.iter().filter_map(|v| v.price_amount());
    let first = prices.next()?;
    Some(prices.fold((first, first), |(low, high), p| (low.min(p), high.max(p))))
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
