//! # Infrastructure Module
//!
//! This module provides infrastructure services for the site generator:
//! file system operations and localized command-line messages.

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
