//! # Shell Module
//!
//! The application root: the route table and the only process-wide state,
//! the active locale. Page views never reach for global state; they receive
//! an `&AppContext` and read the locale, catalog and configuration from it.

use crate::core::catalog::Catalog;
use crate::core::config::SiteConfig;
use crate::core::locale::Locale;
use crate::core::products_view::ProductsView;
use crate::core::text::{t, I18nKey};

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Products,
    Collections,
    NotFound,
}

impl Route {
    /// Routes that appear in the navigation, in order.
    pub const NAVIGABLE: [Route; 3] = [Route::Home, Route::Products, Route::Collections];

    /// Maps a request path onto a route.
    ///
    /// Query strings, fragments, trailing slashes, a trailing `index.html`
    /// and a leading locale segment (`/en/products`) are ignored. Anything
    /// that is not a known page resolves to `NotFound`.
    pub fn resolve(path: &str) -> Route {
        Route::resolve_page(path).0
    }

    /// Like [`Route::resolve`], but also returns the Products state named by
    /// a static Products page such as `/en/products/classic-list.html`.
    pub fn resolve_page(path: &str) -> (Route, Option<ProductsView>) {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let mut segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.last() == Some(&"index.html") {
            segments.pop();
        }
        if let Some(first) = segments.first() {
            if Locale::ALL.iter().any(|locale| locale.code() == *first) {
                segments.remove(0);
            }
        }

        match segments.as_slice() {
            [] => (Route::Home, None),
            ["products"] => (Route::Products, None),
            ["products", page] => match page
                .strip_suffix(".html")
                .map(ProductsView::from_slug)
            {
                Some(Ok(view)) => (Route::Products, Some(view)),
                _ => (Route::NotFound, None),
            },
            ["collections"] => (Route::Collections, None),
            _ => (Route::NotFound, None),
        }
    }

    /// Text key of the navigation label.
    pub fn nav_key(self) -> I18nKey {
        match self {
            Route::Home => I18nKey::NavHome,
            Route::Products => I18nKey::NavProducts,
            Route::Collections => I18nKey::NavCollections,
            Route::NotFound => I18nKey::NotFoundMessage,
        }
    }

    /// The document title of this route in `locale`.
    pub fn title(self, locale: Locale) -> String {
        let brand = t(locale, I18nKey::BrandName);
        match self {
            Route::Home => brand.to_string(),
            other => format!("{} | {}", t(locale, other.nav_key()), brand),
        }
    }
}

/// Shell state shared with every view.
#[derive(Debug, Clone)]
pub struct AppContext<'a> {
    locale: Locale,
    menu_open: bool,
    route: Route,
    catalog: &'a Catalog,
    config: &'a SiteConfig,
}

impl<'a> AppContext<'a> {
    /// Creates the shell on the Home page with the configured default locale.
    pub fn new(catalog: &'a Catalog, config: &'a SiteConfig) -> Self {
        Self {
            locale: config.default_locale,
            menu_open: false,
            route: Route::Home,
            catalog,
            config,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    /// Switches to the other locale; every view rendered afterwards uses it.
    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggle();
        self.locale
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follows a link: resolves the route and closes the mobile menu.
    pub fn navigate(&mut self, path: &str) -> Route {
        self.route = Route::resolve(path);
        self.menu_open = false;
        self.route
    }

    /// Looks up page text in the active locale.
    pub fn text(&self, key: I18nKey) -> &'static str {
        t(self.locale, key)
    }
}
