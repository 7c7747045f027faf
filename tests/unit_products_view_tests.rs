//! # Products View Unit Tests
//!
//! The category and layout selections of the Products page and the listing
//! they resolve to.

mod common;

use bowl_collection::catalog::{Category, CategoryFilter};
use bowl_collection::core::products_view::{Listing, ProductsView, ViewMode};

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn test_initial_state_is_all_grid() {
        let view = ProductsView::default();
        assert_eq!(view.category, CategoryFilter::All);
        assert_eq!(view.mode, ViewMode::Grid);
        assert!(view.is_initial());
    }

    #[test]
    fn test_selections_are_independent() {
        let mut view = ProductsView::default();
        view.select_category(Category::Classic.into());
        view.set_view_mode(ViewMode::List);
        assert_eq!(view.category, CategoryFilter::Only(Category::Classic));
        assert_eq!(view.mode, ViewMode::List);

        view.select_category(CategoryFilter::All);
        assert_eq!(view.mode, ViewMode::List);
        assert!(!view.is_initial());
    }

    #[test]
    fn test_all_states_enumerates_every_combination_once() {
        let states = ProductsView::all_states();
        assert_eq!(states.len(), 8);
        assert!(states[0].is_initial());

        let mut slugs: Vec<String> = states.iter().map(ProductsView::slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), 8);
    }

    #[test]
    fn test_slug_round_trip() {
        for state in ProductsView::all_states() {
            assert_eq!(ProductsView::from_slug(&state.slug()).unwrap(), state);
        }
        assert_eq!(
            ProductsView::new(Category::Classic.into(), ViewMode::List).slug(),
            "classic-list"
        );
    }

    #[test]
    fn test_malformed_slug_is_rejected() {
        assert!(ProductsView::from_slug("classic").is_err());
        assert!(ProductsView::from_slug("rustic-grid").is_err());
        assert!(ProductsView::from_slug("classic-table").is_err());
    }
}

#[cfg(test)]
mod listing_tests {
    use super::*;

    #[test]
    fn test_listing_with_matches() {
        let catalog = common::mixed_catalog();
        let view = ProductsView::default().with_category(Category::Colorful.into());
        match view.listing(&catalog) {
            Listing::Items(products) => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].id, 4);
            }
            other => panic!("expected items, got {:?}", other),
        }
    }

    #[test]
    fn test_listing_for_category_without_products() {
        let catalog = common::catalog_without_colorful();
        let view = ProductsView::default().with_category(Category::Colorful.into());
        let listing = view.listing(&catalog);
        assert_eq!(listing, Listing::NoMatches(Category::Colorful));
        assert!(listing.products().is_empty());
    }

    #[test]
    fn test_listing_for_empty_catalog() {
        let catalog = common::empty_catalog();
        for state in ProductsView::all_states() {
            assert_eq!(state.listing(&catalog), Listing::EmptyCatalog);
        }
    }

    #[test]
    fn test_view_mode_does_not_change_the_listing() {
        let catalog = common::mixed_catalog();
        let grid = ProductsView::new(CategoryFilter::All, ViewMode::Grid);
        let list = grid.with_mode(ViewMode::List);
        assert_eq!(grid.listing(&catalog), list.listing(&catalog));
    }
}
