//! # Catalog Command Module
//!
//! Implements `bowl-collection catalog`, which lists the products, optionally
//! narrowed to one category.

use anyhow::Result;
use std::path::PathBuf;

use super::{load_config, Session};
use crate::core::catalog::{Catalog, CategoryFilter};
use crate::core::locale::Locale;
use crate::core::products_view::{ProductsView, ViewMode};
use crate::reporting::{catalog_json, print_catalog};

/// Executes the catalog command.
///
/// With `json` set, the listing is printed as a JSON array (empty for an
/// empty result) and nothing else is written to stdout.
pub fn execute(
    session: &Session,
    config: Option<PathBuf>,
    category: CategoryFilter,
    locale: Option<Locale>,
    json: bool,
) -> Result<()> {
    let (site_config, message_locale) = load_config(session, config.as_deref())?;
    let content_locale = locale.unwrap_or(site_config.default_locale);

    let catalog = Catalog::builtin();
    let view = ProductsView::new(category, ViewMode::default());
    let listing = view.listing(catalog);

    if json {
        println!("{}", catalog_json(&listing)?);
    } else {
        print_catalog(&listing, category, catalog.len(), content_locale, &message_locale);
    }
    Ok(())
}
