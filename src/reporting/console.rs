//! # Console Reporting Module
//!
//! Prints build summaries and catalog listings to the console with colour
//! and localized messages.

use anyhow::Result;
use colored::*;

use crate::core::build::BuildSummary;
use crate::core::catalog::{CategoryFilter, Product};
use crate::core::locale::Locale;
use crate::core::products_view::Listing;
use crate::infra::t;

/// Prints a summary of a finished static build.
///
/// # Output Format
/// ```text
/// Site built: 25 files, 180342 bytes
///   - es: 11 pages
///   - en: 11 pages
/// ```
pub fn print_build_summary(summary: &BuildSummary, locale: &str) {
    println!(
        "{}",
        t!(
            "build.done",
            locale = locale,
            count = summary.page_count(),
            bytes = summary.total_bytes()
        )
        .green()
        .bold()
    );
    for site_locale in Locale::ALL {
        println!(
            "{}",
            t!(
                "build.locale_pages",
                locale = locale,
                site = site_locale.code(),
                count = summary.pages_for(site_locale)
            )
        );
    }
    if let Some(bytes) = summary.assets_copied {
        println!("{}", t!("build.assets_copied", locale = locale, bytes = bytes).cyan());
    }
}

/// Formats one catalog row: id, localized name, category, price and, for
/// special offers, the original price.
pub fn format_catalog_row(product: &Product, content_locale: Locale, locale: &str) -> String {
    let offer = match product.original_price {
        Some(original) if product.is_special_offer() => format!(
            "  ({}, {})",
            original.to_string().strikethrough(),
            t!("catalog.offer", locale = locale).red()
        ),
        _ => String::new(),
    };
    format!(
        "  #{:<3} {:<32} {:<11} {}{}",
        product.id,
        product.name.get(content_locale),
        product.category.as_str(),
        format!("{:>8}", product.price.to_string()).green(),
        offer
    )
}

/// Prints a filtered catalog listing as a table.
pub fn print_catalog(
    listing: &Listing<'_>,
    filter: CategoryFilter,
    total: usize,
    content_locale: Locale,
    locale: &str,
) {
    println!(
        "{}",
        t!(
            "catalog.header",
            locale = locale,
            filter = filter.as_str(),
            site = content_locale.code()
        )
        .bold()
    );

    match listing {
        Listing::Items(products) => {
            for product in products {
                println!("{}", format_catalog_row(product, content_locale, locale));
            }
        }
        Listing::NoMatches(category) => {
            println!(
                "{}",
                t!("catalog.empty_filter", locale = locale, category = category.as_str()).yellow()
            );
        }
        Listing::EmptyCatalog => {
            println!("{}", t!("catalog.empty_catalog", locale = locale).yellow());
        }
    }

    println!(
        "{}",
        t!(
            "catalog.count",
            locale = locale,
            shown = listing.products().len(),
            total = total
        )
        .dimmed()
    );
}

/// Renders a filtered catalog listing as pretty-printed JSON.
pub fn catalog_json(listing: &Listing<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(listing.products())?)
}
