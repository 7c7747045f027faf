//! # Site Configuration Module
//!
//! Loads `Site.toml`, the build settings of the generated site. Every field
//! has a default, so an empty file (or no file at all) describes the
//! standard Bowl Collection site.

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::locale::Locale;
use crate::infra::t;

/// The default name of the site configuration file.
pub const CONFIG_FILE_NAME: &str = "Site.toml";

/// Contact details rendered in the footer as `mailto:` and `tel:` links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "hello@bowlcollection.com".to_string(),
            phone: "+34 123 456 789".to_string(),
        }
    }
}

impl ContactInfo {
    /// The phone number with all whitespace removed, for `tel:` targets.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.split_whitespace().collect();
        format!("tel:{}", digits)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Social profile links shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            instagram: "#".to_string(),
            facebook: "#".to_string(),
            twitter: "#".to_string(),
        }
    }
}

/// Represents the site configuration, loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// The language for command-line messages ("es" or "en"). Follows the
    /// system locale when unset.
    pub language: Option<String>,
    /// The locale the site root redirects to.
    pub default_locale: Locale,
    /// URL prefix under which the site is served. Always normalised to start
    /// and end with `/`.
    pub base_path: String,
    /// Directory the static build is written to.
    pub output_dir: PathBuf,
    /// Optional directory of images and other static files copied to `<output>/assets`.
    pub assets_dir: Option<PathBuf>,
    /// Year shown in the footer copyright line. Defaults to the current year.
    pub copyright_year: Option<i32>,
    pub contact: ContactInfo,
    pub social: SocialLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            language: None,
            default_locale: Locale::default(),
            base_path: "/".to_string(),
            output_dir: PathBuf::from("dist"),
            assets_dir: None,
            copyright_year: None,
            contact: ContactInfo::default(),
            social: SocialLinks::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a configuration from TOML text and normalises it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: SiteConfig = toml::from_str(content)?;
        config.base_path = normalize_base_path(&config.base_path);
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Builds an absolute URL path under the configured base path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path.trim_start_matches('/'))
    }
}

/// Ensures a base path starts and ends with exactly one `/`.
pub fn normalize_base_path(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// Loads the site configuration from `path`.
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    SiteConfig::from_toml(&content)
        .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
}

/// Resolves the configuration for a command.
///
/// An explicitly requested file must exist. Without one, `Site.toml` in
/// `search_dir` is used when present, and the built-in defaults otherwise.
///
/// # Returns
/// The configuration and the file it was read from, if any
pub fn resolve_site_config(
    explicit: Option<&Path>,
    search_dir: &Path,
) -> Result<(SiteConfig, Option<PathBuf>)> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(search_dir.join(CONFIG_FILE_NAME)).filter(|path| path.is_file()),
    };
    let config = match &source {
        Some(path) => load_site_config(path)?,
        None => SiteConfig::default(),
    };
    Ok((config, source))
}
