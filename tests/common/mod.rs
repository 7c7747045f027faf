// Shared test helpers for integration tests
#![allow(dead_code)]

use bowl_collection::catalog::{Catalog, Category, LocalizedString, Price, Product};
use bowl_collection::config::SiteConfig;

/// A product with placeholder text and no features.
pub fn product(id: u32, category: Category, price: u32, original: Option<u32>) -> Product {
    Product {
        id,
        name: LocalizedString::new("Bowl de prueba", "Test Bowl"),
        price: Price::from_cents(price),
        original_price: original.map(Price::from_cents),
        image: "test.jpg",
        features: vec![],
        description: LocalizedString::new("Descripción", "Description"),
        category,
    }
}

/// The catalog [minimalist, minimalist, classic, colorful] with ids 1..=4.
pub fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        product(1, Category::Minimalist, 2499, Some(2999)),
        product(2, Category::Minimalist, 4599, None),
        product(3, Category::Classic, 3299, None),
        product(4, Category::Colorful, 3999, Some(4499)),
    ])
    .expect("ids are unique")
}

/// A catalog without colorful products.
pub fn catalog_without_colorful() -> Catalog {
    Catalog::new(vec![
        product(1, Category::Minimalist, 2499, None),
        product(3, Category::Classic, 3299, None),
    ])
    .expect("ids are unique")
}

pub fn empty_catalog() -> Catalog {
    Catalog::new(vec![]).expect("an empty catalog is valid")
}

/// A configuration with a fixed copyright year so rendered pages are stable.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        copyright_year: Some(2024),
        ..SiteConfig::default()
    }
}
