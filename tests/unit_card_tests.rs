//! # Product Card Unit Tests

mod common;

use bowl_collection::catalog::{Catalog, Category, LocalizedString};
use bowl_collection::core::card::{BadgeStyle, FeatureIcon, ProductCard};
use bowl_collection::Locale;

#[cfg(test)]
mod icon_tests {
    use super::*;

    #[test]
    fn test_icons_match_keywords_in_both_languages() {
        assert_eq!(FeatureIcon::for_label("Microwave safe"), FeatureIcon::Microwave);
        assert_eq!(FeatureIcon::for_label("Apto para MICROONDAS"), FeatureIcon::Microwave);
        assert_eq!(FeatureIcon::for_label("Oven safe"), FeatureIcon::Oven);
        assert_eq!(FeatureIcon::for_label("Apto para horno"), FeatureIcon::Oven);
        assert_eq!(FeatureIcon::for_label("Handmade"), FeatureIcon::Check);
        assert_eq!(FeatureIcon::for_label(""), FeatureIcon::Check);
    }

    #[test]
    fn test_card_features_keep_their_icons_across_locales() {
        let product = Catalog::builtin().find(1).unwrap();
        let es = ProductCard::new(product, Locale::Es);
        let en = ProductCard::new(product, Locale::En);
        let icons = |card: &ProductCard| card.features.iter().map(|f| f.icon).collect::<Vec<_>>();
        assert_eq!(icons(&es), icons(&en));
        assert_eq!(
            icons(&en),
            vec![FeatureIcon::Check, FeatureIcon::Microwave, FeatureIcon::Oven]
        );
    }
}

#[cfg(test)]
mod badge_tests {
    use super::*;

    #[test]
    fn test_each_category_has_its_own_badge() {
        assert_eq!(BadgeStyle::for_category(Category::Minimalist), BadgeStyle::MINIMALIST);
        assert_eq!(BadgeStyle::for_category(Category::Colorful), BadgeStyle::COLORFUL);
        assert_eq!(BadgeStyle::for_category(Category::Classic), BadgeStyle::CLASSIC);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_minimalist() {
        assert_eq!(BadgeStyle::for_tag("rustic"), BadgeStyle::MINIMALIST);
        assert_eq!(BadgeStyle::for_tag(""), BadgeStyle::MINIMALIST);
    }
}

#[cfg(test)]
mod card_tests {
    use super::*;

    #[test]
    fn test_offer_card_shows_both_prices_and_badge() {
        let product = common::product(1, Category::Minimalist, 2499, Some(2999));
        let card = ProductCard::new(&product, Locale::En);
        assert!(card.is_special_offer());
        assert_eq!(card.price, "$24.99");
        assert_eq!(card.original_price.as_deref(), Some("$29.99"));
        assert_eq!(card.special_offer, Some("Special offer"));
    }

    #[test]
    fn test_original_price_not_above_price_is_hidden() {
        for original in [Some(2499), Some(1999), None] {
            let product = common::product(1, Category::Classic, 2499, original);
            let card = ProductCard::new(&product, Locale::Es);
            assert!(!card.is_special_offer());
            assert_eq!(card.original_price, None);
            assert_eq!(card.special_offer, None);
        }
    }

    #[test]
    fn test_card_text_follows_locale() {
        let mut product = common::product(9, Category::Colorful, 1000, Some(1500));
        product.features = vec![LocalizedString::new("Apto para horno", "Oven safe")];

        let es = ProductCard::new(&product, Locale::Es);
        assert_eq!(es.name, "Bowl de prueba");
        assert_eq!(es.view_details, "Ver Detalles");
        assert_eq!(es.special_offer, Some("Oferta especial"));
        assert_eq!(es.features[0].label, "Apto para horno");

        let en = ProductCard::new(&product, Locale::En);
        assert_eq!(en.name, "Test Bowl");
        assert_eq!(en.view_details, "View Details");
        assert_eq!(en.features[0].label, "Oven safe");
        assert_eq!(en.category_label, "Colorful");
        assert_eq!(en.badge, BadgeStyle::COLORFUL);
    }
}
