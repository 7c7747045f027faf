//! # Reporting Module
//!
//! Console output of the command-line front-end: colourful build summaries
//! and catalog listings, localized through the command-line message tables.

pub mod console;

// Re-export common reporting functions
pub use console::{catalog_json, print_build_summary, print_catalog};
