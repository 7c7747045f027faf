//! # Core Module
//!
//! This module contains the domain of the site: locales and page text, the
//! product catalog, the Products view state, the product card model, the
//! shell with its route table, configuration, and the static build plan.

pub mod build;
pub mod card;
pub mod catalog;
pub mod config;
pub mod locale;
pub mod planner;
pub mod products_view;
pub mod shell;
pub mod text;

// Re-exports
pub use catalog::{filter_products, Catalog, Category, CategoryFilter, Product};
pub use config::SiteConfig;
pub use locale::Locale;
pub use products_view::{Listing, ProductsView, ViewMode};
pub use shell::{AppContext, Route};
