//! # Product Card Model
//!
//! Everything a product card displays, resolved from one `Product` and the
//! active locale. The HTML renderer only lays this model out, so the display
//! rules (feature icons, category colours, the special-offer condition) live
//! and are tested here.

use crate::core::catalog::{Category, Product};
use crate::core::locale::Locale;
use crate::core::text::{t, I18nKey};

/// Icon shown next to a feature tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureIcon {
    Microwave,
    Oven,
    Check,
}

impl FeatureIcon {
    /// Picks the icon by keyword match against the lower-cased label,
    /// recognising both English and Spanish wording.
    pub fn for_label(label: &str) -> FeatureIcon {
        let lower = label.to_lowercase();
        if lower.contains("microwave") || lower.contains("microondas") {
            FeatureIcon::Microwave
        } else if lower.contains("oven") || lower.contains("horno") {
            FeatureIcon::Oven
        } else {
            FeatureIcon::Check
        }
    }
}

/// Colour binding of a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadgeStyle {
    pub class: &'static str,
}

impl BadgeStyle {
    pub const MINIMALIST: BadgeStyle = BadgeStyle { class: "badge-green" };
    pub const COLORFUL: BadgeStyle = BadgeStyle { class: "badge-orange" };
    pub const CLASSIC: BadgeStyle = BadgeStyle { class: "badge-amber" };

    pub fn for_category(category: Category) -> BadgeStyle {
        BadgeStyle::for_tag(category.as_str())
    }

    /// Looks a badge up by category tag. Unrecognised tags take the
    /// minimalist binding.
    pub fn for_tag(tag: &str) -> BadgeStyle {
        match tag {
            "colorful" => BadgeStyle::COLORFUL,
            "classic" => BadgeStyle::CLASSIC,
            "minimalist" => BadgeStyle::MINIMALIST,
            _ => BadgeStyle::MINIMALIST,
        }
    }
}

/// A feature tag with its icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTag {
    pub label: &'static str,
    pub icon: FeatureIcon,
}

/// The resolved content of one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: u32,
    pub image: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: String,
    /// Struck-through previous price; present only for special offers.
    pub original_price: Option<String>,
    /// Badge text; present only for special offers.
    pub special_offer: Option<&'static str>,
    pub features: Vec<FeatureTag>,
    pub category_label: String,
    pub badge: BadgeStyle,
    pub view_details: &'static str,
}

impl ProductCard {
    pub fn new(product: &Product, locale: Locale) -> Self {
        let offer = product.is_special_offer();
        let features = product
            .features
            .iter()
            .map(|feature| {
                let label = feature.get(locale);
                FeatureTag {
                    label,
                    icon: FeatureIcon::for_label(label),
                }
            })
            .collect();

        Self {
            id: product.id,
            image: product.image,
            name: product.name.get(locale),
            description: product.description.get(locale),
            price: product.price.to_string(),
            original_price: product
                .original_price
                .filter(|_| offer)
                .map(|price| price.to_string()),
            special_offer: offer.then(|| t(locale, I18nKey::CardSpecialOffer)),
            features,
            category_label: product.category.label(),
            badge: BadgeStyle::for_category(product.category),
            view_details: t(locale, I18nKey::CardViewDetails),
        }
    }

    pub fn is_special_offer(&self) -> bool {
        self.special_offer.is_some()
    }
}
