//! # Products View State
//!
//! The transient state of the Products page: the selected category filter and
//! the layout mode. States are `CategoryFilter × ViewMode`, the initial state
//! is `(All, Grid)`, and every state is reachable from every other one by a
//! single user selection.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

use crate::core::catalog::{Catalog, Category, CategoryFilter, Product};

/// How product cards are arranged. Layout only; never affects which products are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Grid, ViewMode::List];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => bail!("unknown view mode '{}', expected 'grid' or 'list'", other),
        }
    }
}

/// What the product grid shows for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a> {
    /// At least one product passed the filter.
    Items(Vec<&'a Product>),
    /// The catalog has products, but none in the selected category.
    NoMatches(Category),
    /// The catalog itself has no products.
    EmptyCatalog,
}

impl<'a> Listing<'a> {
    pub fn products(&self) -> &[&'a Product] {
        match self {
            Listing::Items(products) => products,
            Listing::NoMatches(_) | Listing::EmptyCatalog => &[],
        }
    }
}

/// Selected category and layout of the Products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProductsView {
    pub category: CategoryFilter,
    pub mode: ViewMode,
}

impl ProductsView {
    pub fn new(category: CategoryFilter, mode: ViewMode) -> Self {
        Self { category, mode }
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// The state reached by selecting `category` from this one.
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    /// The state reached by selecting `mode` from this one.
    pub fn with_mode(self, mode: ViewMode) -> Self {
        Self { mode, ..self }
    }

    /// Every reachable state, initial state first.
    pub fn all_states() -> Vec<ProductsView> {
        CategoryFilter::ALL
            .iter()
            .flat_map(|&category| {
                ViewMode::ALL
                    .iter()
                    .map(move |&mode| ProductsView::new(category, mode))
            })
            .collect()
    }

    pub fn is_initial(&self) -> bool {
        *self == ProductsView::default()
    }

    /// Static page name of this state, e.g. `classic-list`.
    pub fn slug(&self) -> String {
        format!("{}-{}", self.category.as_str(), self.mode.as_str())
    }

    /// Parses a page name produced by [`ProductsView::slug`].
    pub fn from_slug(slug: &str) -> Result<Self> {
        let Some((category, mode)) = slug.rsplit_once('-') else {
            bail!("malformed products page name '{}'", slug);
        };
        Ok(Self::new(category.parse()?, mode.parse()?))
    }

    /// Resolves the products to display for this state.
    pub fn listing<'a>(&self, catalog: &'a Catalog) -> Listing<'a> {
        if catalog.is_empty() {
            return Listing::EmptyCatalog;
        }
        let products = catalog.filter(self.category);
        match (products.is_empty(), self.category) {
            (false, _) => Listing::Items(products),
            (true, CategoryFilter::Only(category)) => Listing::NoMatches(category),
            // A non-empty catalog never filters to nothing under `All`.
            (true, CategoryFilter::All) => Listing::EmptyCatalog,
        }
    }
}
