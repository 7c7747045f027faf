//! # Bowl Collection Library
//!
//! This library renders the bilingual (Spanish/English) Bowl Collection
//! catalog site: a home page, a filterable product listing and a collections
//! overview, all backed by an in-memory catalog.
//!
//! ## Modules
//!
//! - `core` - Locales, page text, catalog, Products view state, shell and build plan
//! - `render` - Pure HTML rendering of every page
//! - `infra` - File system operations and command-line i18n
//! - `reporting` - Console output of builds and catalog listings
//! - `cli` - Command-line interface and commands

pub mod cli;
pub mod core;
pub mod infra;
pub mod render;
pub mod reporting;

// Re-export commonly used items
pub use self::core::catalog;
pub use self::core::config;
pub use self::core::locale::Locale;
pub use self::core::text;

/// Picks the command-line message language from the system locale.
///
/// Tries the full locale first, then just the language part ("es" from
/// "es-ES"), and finally falls back to "en".
pub fn detect_cli_language() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n for command-line messages
rust_i18n::i18n!("locales/cli", fallback = "en");
