//! # Render Command Module
//!
//! Implements `bowl-collection render`, which prints one page to stdout.

use anyhow::Result;
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;

use super::{load_config, Session};
use crate::core::catalog::{Catalog, CategoryFilter};
use crate::core::locale::Locale;
use crate::core::products_view::{ProductsView, ViewMode};
use crate::core::shell::{AppContext, Route};
use crate::infra::t;
use crate::render::render_path;

/// The locale named by the first segment of `path`, as in `/en/products`.
fn locale_from_path(path: &str) -> Option<Locale> {
    let first = path.split('/').find(|segment| !segment.is_empty())?;
    Locale::ALL.into_iter().find(|locale| locale.code() == first)
}

/// Executes the render command.
///
/// The content locale is taken from `--locale`, then from a locale prefix in
/// `path`, then from the configured default. A static Products page such as
/// `/en/products/classic-list.html` overrides `category` and `view`. Unknown
/// paths render the not-found page and still succeed.
pub fn execute(
    session: &Session,
    config: Option<PathBuf>,
    path: &str,
    locale: Option<Locale>,
    category: CategoryFilter,
    view: ViewMode,
) -> Result<()> {
    let (site_config, message_locale) = load_config(session, config.as_deref())?;
    let content_locale = locale
        .or_else(|| locale_from_path(path))
        .unwrap_or(site_config.default_locale);

    let ctx = AppContext::new(Catalog::builtin(), &site_config).with_locale(content_locale);
    let (route, html) = render_path(&ctx, path, ProductsView::new(category, view));

    if route == Route::NotFound && !session.quiet {
        eprintln!(
            "{}",
            t!("render.not_found", locale = &message_locale, path = path).yellow()
        );
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_prefix_is_detected() {
        assert_eq!(locale_from_path("/en/products"), Some(Locale::En));
        assert_eq!(locale_from_path("es/"), Some(Locale::Es));
        assert_eq!(locale_from_path("/products"), None);
        assert_eq!(locale_from_path("/"), None);
    }
}
