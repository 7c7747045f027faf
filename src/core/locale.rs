//! # Locale Module
//!
//! The two display languages of the site. A `Locale` is selected exactly once
//! at a time, starts out as Spanish and only changes through `toggle`.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Every supported locale, in the order pages are built.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// Returns the other locale.
    pub fn toggle(self) -> Locale {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    /// The short code used in URLs, the `lang` attribute and config files.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Maps a system or user supplied locale tag ("es", "en-US", "es_ES.UTF-8")
    /// onto a supported locale by its language part.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let lang = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Locale::from_tag(s.trim()) {
            Some(locale) => Ok(locale),
            None => bail!("unsupported locale '{}', expected 'es' or 'en'", s),
        }
    }
}
