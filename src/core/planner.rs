//! # Site Build Planner Module
//!
//! Decides which pages a static build produces and where each one lives.
//! Every locale gets its own tree, and every reachable Products view state is
//! materialised as its own page so that filter and layout selections become
//! plain links.
//!
//! ```text
//! <out>/index.html                  redirect to the default locale
//! <out>/404.html                    not-found page in the default locale
//! <out>/<locale>/index.html         Home
//! <out>/<locale>/products/index.html          Products (all, grid)
//! <out>/<locale>/products/<filter>-<mode>.html  the other Products states
//! <out>/<locale>/collections/index.html       Collections
//! <out>/<locale>/404.html           not-found page
//! ```

use std::path::PathBuf;

use crate::core::config::SiteConfig;
use crate::core::locale::Locale;
use crate::core::products_view::ProductsView;
use crate::core::shell::Route;

/// One page of the site in one locale. For `Route::Products` the view state
/// selects which variant; other routes ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageTarget {
    pub locale: Locale,
    pub route: Route,
    pub products: ProductsView,
}

impl PageTarget {
    pub fn new(locale: Locale, route: Route) -> Self {
        Self {
            locale,
            route,
            products: ProductsView::default(),
        }
    }

    pub fn products(locale: Locale, products: ProductsView) -> Self {
        Self {
            locale,
            route: Route::Products,
            products,
        }
    }

    /// The same page in another locale.
    pub fn in_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Path of the page relative to the site root, without the base path.
    pub fn relative_url(&self) -> String {
        let locale = self.locale.code();
        match self.route {
            Route::Home => format!("{}/", locale),
            Route::Products if self.products.is_initial() => format!("{}/products/", locale),
            Route::Products => format!("{}/products/{}.html", locale, self.products.slug()),
            Route::Collections => format!("{}/collections/", locale),
            Route::NotFound => format!("{}/404.html", locale),
        }
    }

    /// Link to this page under the configured base path.
    pub fn href(&self, config: &SiteConfig) -> String {
        config.href(&self.relative_url())
    }

    /// File written for this page, relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        let url = self.relative_url();
        if url.ends_with('/') {
            PathBuf::from(format!("{}index.html", url))
        } else {
            PathBuf::from(url)
        }
    }
}

/// Represents a complete static build.
#[derive(Debug)]
pub struct SitePlan {
    /// Every localized page, grouped by locale.
    pub pages: Vec<PageTarget>,
    /// The locale the site root redirects to and whose not-found page is served at `/404.html`.
    pub default_locale: Locale,
}

/// Creates the build plan for the given configuration.
pub fn plan_site(config: &SiteConfig) -> SitePlan {
    let mut pages = Vec::new();

    for locale in Locale::ALL {
        pages.push(PageTarget::new(locale, Route::Home));
        pages.extend(
            ProductsView::all_states()
                .into_iter()
                .map(|state| PageTarget::products(locale, state)),
        );
        pages.push(PageTarget::new(locale, Route::Collections));
        pages.push(PageTarget::new(locale, Route::NotFound));
    }

    SitePlan {
        pages,
        default_locale: config.default_locale,
    }
}
