//! # Commands Module
//!
//! One module per subcommand, plus the state they share.

pub mod build;
pub mod catalog;
pub mod init;
pub mod render;

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::config::{resolve_site_config, SiteConfig};
use crate::infra::t;

/// Global options shared by every command.
#[derive(Debug, Clone)]
pub struct Session {
    /// Language passed with `--lang`, if any.
    pub explicit_lang: Option<String>,
    /// Language picked before the configuration was read.
    pub detected_lang: String,
    pub quiet: bool,
}

impl Session {
    /// The message language once a configuration is known: `--lang` wins,
    /// then the configured `language`, then the system locale.
    pub fn language_for(&self, config: &SiteConfig) -> String {
        self.explicit_lang
            .clone()
            .or_else(|| config.language.clone())
            .unwrap_or_else(|| self.detected_lang.clone())
    }
}

/// Loads the configuration for a command and switches the message language
/// to the one it asks for.
///
/// Returns the configuration and the active message language.
pub(crate) fn load_config(
    session: &Session,
    explicit: Option<&Path>,
) -> Result<(SiteConfig, String)> {
    let (config, source) = resolve_site_config(explicit, Path::new(""))?;

    let locale = session.language_for(&config);
    rust_i18n::set_locale(&locale);

    if !session.quiet {
        match &source {
            Some(path) => eprintln!(
                "{}",
                t!("config.loaded", locale = &locale, path = path.display()).dimmed()
            ),
            None => eprintln!("{}", t!("config.defaults", locale = &locale).dimmed()),
        }
    }

    Ok((config, locale))
}
