//! # Localized Text Table
//!
//! The page text of the site, generated by `build.rs` from
//! `locales/site/{en,es}.toml`. Both files are checked for identical key sets
//! at build time, so a lookup here always succeeds and has no fallback path.

use crate::core::locale::Locale;

include!(concat!(env!("OUT_DIR"), "/site_text.rs"));

/// Resolves a named key for the given locale.
pub fn t(locale: Locale, key: I18nKey) -> &'static str {
    match locale {
        Locale::Es => get_translation_es(key),
        Locale::En => get_translation_en(key),
    }
}
