//! # Shell and Route Table Unit Tests

mod common;

use bowl_collection::catalog::{Catalog, Category};
use bowl_collection::config::SiteConfig;
use bowl_collection::core::planner::{plan_site, PageTarget};
use bowl_collection::core::products_view::{ProductsView, ViewMode};
use bowl_collection::core::shell::{AppContext, Route};
use bowl_collection::text::I18nKey;
use bowl_collection::Locale;

#[cfg(test)]
mod route_tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/products"), Route::Products);
        assert_eq!(Route::resolve("/collections"), Route::Collections);
    }

    #[test]
    fn test_unknown_paths_resolve_to_not_found() {
        assert_eq!(Route::resolve("/unknown-path"), Route::NotFound);
        assert_eq!(Route::resolve("/products/42"), Route::NotFound);
        assert_eq!(Route::resolve("/fr/products"), Route::NotFound);
    }

    #[test]
    fn test_path_normalisation() {
        assert_eq!(Route::resolve("/products/"), Route::Products);
        assert_eq!(Route::resolve("/products/index.html"), Route::Products);
        assert_eq!(Route::resolve("/en/collections"), Route::Collections);
        assert_eq!(Route::resolve("/es/"), Route::Home);
        assert_eq!(Route::resolve("/products?category=classic#top"), Route::Products);
    }

    #[test]
    fn test_static_products_page_resolves_to_its_state() {
        let classic_list = ProductsView::new(Category::Classic.into(), ViewMode::List);
        let url = format!("/{}", PageTarget::products(Locale::En, classic_list).relative_url());
        assert_eq!(url, "/en/products/classic-list.html");

        assert_eq!(Route::resolve(&url), Route::Products);
        assert_eq!(Route::resolve_page(&url), (Route::Products, Some(classic_list)));
        assert_eq!(Route::resolve_page("/products/"), (Route::Products, None));
    }

    #[test]
    fn test_unknown_products_page_is_not_found() {
        assert_eq!(Route::resolve_page("/products/rustic-grid.html"), (Route::NotFound, None));
        assert_eq!(Route::resolve("/en/products/classic-list"), Route::NotFound);
        assert_eq!(Route::resolve("/en/products/classic-list.htm"), Route::NotFound);
    }

    #[test]
    fn test_every_planned_page_resolves_to_itself() {
        for page in plan_site(&SiteConfig::default()).pages {
            let url = format!("/{}", page.relative_url());
            let (route, view) = Route::resolve_page(&url);
            assert_eq!(route, page.route, "{}", url);
            assert_eq!(view.unwrap_or_default(), page.products, "{}", url);
        }
    }

    #[test]
    fn test_navigable_routes_resolve_from_their_pages() {
        for route in Route::NAVIGABLE {
            let url = format!("/{}", PageTarget::new(Locale::Es, route).relative_url());
            assert_eq!(Route::resolve(&url), route);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Home.title(Locale::En), "Bowl Collection");
        assert_eq!(Route::Products.title(Locale::En), "Products | Bowl Collection");
        assert_eq!(Route::Products.title(Locale::Es), "Productos | Bowl Collection");
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn test_new_context_starts_on_home_in_default_locale() {
        let config = common::site_config();
        let ctx = AppContext::new(Catalog::builtin(), &config);
        assert_eq!(ctx.locale(), Locale::Es);
        assert_eq!(ctx.route(), Route::Home);
        assert!(!ctx.is_menu_open());
    }

    #[test]
    fn test_toggle_locale_changes_every_lookup() {
        let config = common::site_config();
        let mut ctx = AppContext::new(Catalog::builtin(), &config);
        assert_eq!(ctx.text(I18nKey::NavProducts), "Productos");

        assert_eq!(ctx.toggle_locale(), Locale::En);
        assert_eq!(ctx.text(I18nKey::NavProducts), "Products");

        assert_eq!(ctx.toggle_locale(), Locale::Es);
        assert_eq!(ctx.text(I18nKey::NavProducts), "Productos");
    }

    #[test]
    fn test_navigation_closes_the_menu() {
        let config = common::site_config();
        let mut ctx = AppContext::new(Catalog::builtin(), &config);
        ctx.toggle_menu();
        assert!(ctx.is_menu_open());

        assert_eq!(ctx.navigate("/collections"), Route::Collections);
        assert!(!ctx.is_menu_open());
        assert_eq!(ctx.route(), Route::Collections);
    }

    #[test]
    fn test_unknown_path_is_not_found_in_both_locales() {
        let config = common::site_config();
        for locale in Locale::ALL {
            let mut ctx = AppContext::new(Catalog::builtin(), &config).with_locale(locale);
            assert_eq!(ctx.navigate("/unknown-path"), Route::NotFound);
            assert_eq!(ctx.locale(), locale);
        }
    }
}
