//! # HTML Rendering Module
//!
//! Turns the shell context and a page target into a complete HTML document.
//! Rendering is a pure function of its inputs: the same context, catalog,
//! configuration and target always produce the same markup.

pub mod card;
pub mod icons;
pub mod layout;
pub mod pages;

use maud::{html, Markup, DOCTYPE};

use crate::core::config::SiteConfig;
use crate::core::planner::PageTarget;
use crate::core::products_view::ProductsView;
use crate::core::shell::{AppContext, Route};

/// Embedded stylesheet, written to [`STYLESHEET_PATH`] by a site build.
pub const STYLESHEET: &str = include_str!("render/assets/site.css");

/// Location of the stylesheet relative to the site root.
pub const STYLESHEET_PATH: &str = "assets/site.css";

/// Resolves an image handle to its URL under the site's asset directory.
pub fn image_href(config: &SiteConfig, image: &str) -> String {
    config.href(&format!("assets/images/{}", image))
}

/// Renders one page as a complete HTML document.
///
/// The locale and route of `target` take precedence over the ones held by
/// `ctx`, so a single shell can render every page of a build.
pub fn render_page(ctx: &AppContext<'_>, target: &PageTarget) -> String {
    let ctx = ctx
        .clone()
        .with_locale(target.locale)
        .with_route(target.route);

    let content = match target.route {
        Route::Home => pages::home(&ctx),
        Route::Products => pages::products(&ctx, target.products),
        Route::Collections => pages::collections_page(&ctx),
        Route::NotFound => pages::not_found(&ctx),
    };

    layout::document(&ctx, target, content).into_string()
}

/// Resolves `path` through the route table and renders the resulting page in
/// the context's locale. Unknown paths render the not-found page.
///
/// A static Products page (`/products/classic-list.html`) selects its own
/// state; otherwise `products` is used.
pub fn render_path(
    ctx: &AppContext<'_>,
    path: &str,
    products: ProductsView,
) -> (Route, String) {
    let (route, page_state) = Route::resolve_page(path);
    let target = PageTarget {
        locale: ctx.locale(),
        route,
        products: page_state.unwrap_or(products),
    };
    (route, render_page(ctx, &target))
}

/// The site root page, which forwards visitors to the default locale.
pub fn root_redirect(config: &SiteConfig) -> String {
    let target = PageTarget::new(config.default_locale, Route::Home).href(config);
    let markup: Markup = html! {
        (DOCTYPE)
        html lang=(config.default_locale.code()) {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(format!("0; url={}", target));
                link rel="canonical" href=(target);
                title { "Bowl Collection" }
            }
            body {
                a href=(target) { "Bowl Collection" }
            }
        }
    };
    markup.into_string()
}
