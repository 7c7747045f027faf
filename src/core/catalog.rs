//! # Catalog Module
//!
//! This module defines the product catalog of the Bowl Collection: the
//! product records, their categories and prices, the collections overview,
//! and the category filter used by the Products view.
//!
//! All catalog data is immutable. The built-in catalog is assembled once on
//! first use and shared for the lifetime of the process.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::core::locale::Locale;
use crate::core::text::I18nKey;

/// The id of the product highlighted on the Home page.
pub const FEATURED_PRODUCT_ID: u32 = 2;

/// The three-valued style classification of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Minimalist,
    Colorful,
    Classic,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Minimalist => "minimalist",
            Category::Colorful => "colorful",
            Category::Classic => "classic",
        }
    }

    /// The category tag with its first letter upper-cased, as shown on badges.
    pub fn label(self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimalist" => Ok(Category::Minimalist),
            "colorful" => Ok(Category::Colorful),
            "classic" => Ok(Category::Classic),
            other => bail!(
                "unknown category '{}', expected one of: minimalist, colorful, classic",
                other
            ),
        }
    }
}

/// The category selection of the Products view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Minimalist),
        CategoryFilter::Only(Category::Colorful),
        CategoryFilter::Only(Category::Classic),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == category,
        }
    }

    /// Text key of the filter button label.
    pub fn label_key(self) -> I18nKey {
        match self {
            CategoryFilter::All => I18nKey::FilterAll,
            CategoryFilter::Only(Category::Minimalist) => I18nKey::FilterMinimalist,
            CategoryFilter::Only(Category::Colorful) => I18nKey::FilterColorful,
            CategoryFilter::Only(Category::Classic) => I18nKey::FilterClassic,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

/// An exact, non-negative price stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Price(cents)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

/// A literal string in both supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedString {
    pub es: &'static str,
    pub en: &'static str,
}

impl LocalizedString {
    pub const fn new(es: &'static str, en: &'static str) -> Self {
        Self { es, en }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => self.es,
            Locale::En => self.en,
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Unique and stable within its catalog.
    pub id: u32,
    pub name: LocalizedString,
    pub price: Price,
    /// Price before the current discount. Only meaningful when greater than `price`.
    pub original_price: Option<Price>,
    /// Opaque image handle, resolved by the renderer.
    pub image: &'static str,
    pub features: Vec<LocalizedString>,
    pub description: LocalizedString,
    pub category: Category,
}

impl Product {
    /// A product is a special offer when its original price exceeds its current price.
    pub fn is_special_offer(&self) -> bool {
        matches!(self.original_price, Some(original) if original > self.price)
    }
}

/// Returns the products passing `filter`, in their original relative order.
///
/// Filtering is pure and idempotent, and `CategoryFilter::All` returns every
/// input product unchanged.
pub fn filter_products<'a, I>(products: I, filter: CategoryFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| filter.matches(product))
        .collect()
}

/// An ordered, immutable collection of products with unique ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog in authoring order, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                bail!("duplicate product id {} in catalog", product.id);
            }
        }
        Ok(Self { products })
    }

    /// The built-in Bowl Collection catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The product highlighted on the Home page, if this catalog carries it.
    pub fn featured(&self) -> Option<&Product> {
        self.find(FEATURED_PRODUCT_ID)
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        filter_products(&self.products, filter)
    }
}

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    products: builtin_products(),
});

const FOOD_GRADE: LocalizedString = LocalizedString::new("Apto para alimentos", "Food grade");
const MICROWAVE_SAFE: LocalizedString =
    LocalizedString::new("Apto para microondas", "Microwave safe");
const OVEN_SAFE: LocalizedString = LocalizedString::new("Apto para horno", "Oven safe");
const DISHWASHER_SAFE: LocalizedString =
    LocalizedString::new("Apto para lavavajillas", "Dishwasher safe");
const STACKABLE: LocalizedString = LocalizedString::new("Apilable", "Stackable");
const HANDMADE: LocalizedString = LocalizedString::new("Hecho a mano", "Handmade");
const NATURAL_CLAY: LocalizedString = LocalizedString::new("Arcilla natural", "Natural clay");
const PREMIUM_QUALITY: LocalizedString =
    LocalizedString::new("Calidad premium", "Premium quality");
const GIFT_READY: LocalizedString = LocalizedString::new("Listo para regalar", "Gift ready");

fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: LocalizedString::new("Bowl Minimalista Sage", "Sage Minimalist Bowl"),
            price: Price::from_cents(2499),
            original_price: Some(Price::from_cents(2999)),
            image: "product-2.jpg",
            features: vec![FOOD_GRADE, MICROWAVE_SAFE, OVEN_SAFE],
            description: LocalizedString::new(
                "Elegante bowl en tono sage perfecto para ensaladas y bowls saludables.",
                "Elegant sage-toned bowl perfect for salads and healthy bowls.",
            ),
            category: Category::Minimalist,
        },
        Product {
            id: 2,
            name: LocalizedString::new("Set de Bowls Modernos", "Modern Bowl Set"),
            price: Price::from_cents(4599),
            original_price: None,
            image: "product-set-1.jpg",
            features: vec![FOOD_GRADE, DISHWASHER_SAFE, STACKABLE],
            description: LocalizedString::new(
                "Conjunto de tres bowls en tonos neutros ideales para cualquier ocasión.",
                "Set of three bowls in neutral tones ideal for any occasion.",
            ),
            category: Category::Minimalist,
        },
        Product {
            id: 3,
            name: LocalizedString::new("Bowl Clásico Terracota", "Classic Terracotta Bowl"),
            price: Price::from_cents(3299),
            original_price: None,
            image: "product-3.jpg",
            features: vec![HANDMADE, OVEN_SAFE, NATURAL_CLAY],
            description: LocalizedString::new(
                "Bowl tradicional en terracota con acabado mate y diseño atemporal.",
                "Traditional terracotta bowl with matte finish and timeless design.",
            ),
            category: Category::Classic,
        },
        Product {
            id: 4,
            name: LocalizedString::new("Bowl Gourmet Premium", "Premium Gourmet Bowl"),
            price: Price::from_cents(3999),
            original_price: Some(Price::from_cents(4499)),
            image: "product-4.jpg",
            features: vec![PREMIUM_QUALITY, MICROWAVE_SAFE, GIFT_READY],
            description: LocalizedString::new(
                "Bowl de alta gama perfecto para presentaciones elegantes y ocasiones especiales.",
                "High-end bowl perfect for elegant presentations and special occasions.",
            ),
            category: Category::Colorful,
        },
    ]
}

/// One entry of the collections overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub category: Category,
    pub title: I18nKey,
    pub description: I18nKey,
    pub items: I18nKey,
    pub image: &'static str,
    pub gradient: &'static str,
    pub accent: &'static str,
}

static COLLECTIONS: [Collection; 3] = [
    Collection {
        category: Category::Minimalist,
        title: I18nKey::CollectionMinimalistTitle,
        description: I18nKey::CollectionMinimalistDescription,
        items: I18nKey::CollectionMinimalistItems,
        image: "product-2.jpg",
        gradient: "gradient-green",
        accent: "accent-green",
    },
    Collection {
        category: Category::Colorful,
        title: I18nKey::CollectionColorfulTitle,
        description: I18nKey::CollectionColorfulDescription,
        items: I18nKey::CollectionColorfulItems,
        image: "product-4.jpg",
        gradient: "gradient-orange",
        accent: "accent-orange",
    },
    Collection {
        category: Category::Classic,
        title: I18nKey::CollectionClassicTitle,
        description: I18nKey::CollectionClassicDescription,
        items: I18nKey::CollectionClassicItems,
        image: "product-3.jpg",
        gradient: "gradient-amber",
        accent: "accent-amber",
    },
];

/// The collections overview entries; the first one is rendered as the featured card.
pub fn collections() -> &'static [Collection] {
    &COLLECTIONS
}
