//! # Static Build Module
//!
//! Executes a [`SitePlan`]: renders every planned page, writes it below the
//! output directory together with the stylesheet, the root redirect and the
//! root not-found page, and copies the configured static assets.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::catalog::Catalog;
use crate::core::config::SiteConfig;
use crate::core::locale::Locale;
use crate::core::planner::{plan_site, PageTarget, SitePlan};
use crate::core::shell::{AppContext, Route};
use crate::infra::fs::{
    copy_dir_all, expand_path, is_directory, prepare_output_dir, write_output_file,
};
use crate::render::{render_page, root_redirect, STYLESHEET, STYLESHEET_PATH};

/// A file produced by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    pub locale: Option<Locale>,
    pub route: Option<Route>,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of a static build.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    pub pages: Vec<WrittenPage>,
    /// Bytes copied from the configured assets directory, if one was copied.
    pub assets_copied: Option<u64>,
}

impl BuildSummary {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages_for(&self, locale: Locale) -> usize {
        self.pages
            .iter()
            .filter(|page| page.locale == Some(locale))
            .count()
    }

    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|page| page.bytes).sum()
    }
}

fn write(
    summary: &mut BuildSummary,
    target: Option<&PageTarget>,
    relative: &Path,
    html: &str,
) -> Result<()> {
    let path = write_output_file(&summary.output_dir, relative, html)?;
    summary.pages.push(WrittenPage {
        locale: target.map(|page| page.locale),
        route: target.map(|page| page.route),
        path,
        bytes: html.len(),
    });
    Ok(())
}

/// Renders the whole site into `output_dir`.
///
/// # Arguments
/// * `catalog` - Catalog shown on the Home and Products pages
/// * `config` - Site configuration
/// * `output_dir` - Root directory of the build; created if missing
///
/// # Returns
/// A summary of every file written
pub fn build_site(
    catalog: &Catalog,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<BuildSummary> {
    let output_dir = expand_path(output_dir)?;
    prepare_output_dir(&output_dir)?;

    let plan: SitePlan = plan_site(config);
    let ctx = AppContext::new(catalog, config);
    let mut summary = BuildSummary {
        output_dir,
        ..BuildSummary::default()
    };

    // Generated files overwrite same-named assets, so assets go first.
    if let Some(assets_dir) = &config.assets_dir {
        let assets_dir = expand_path(assets_dir)?;
        if is_directory(&assets_dir) {
            let copied = copy_dir_all(&assets_dir, &summary.output_dir.join("assets"))?;
            summary.assets_copied = Some(copied);
        }
    }

    for target in &plan.pages {
        let html = render_page(&ctx, target);
        write(&mut summary, Some(target), &target.output_path(), &html)?;
    }

    write(&mut summary, None, Path::new("index.html"), &root_redirect(config))?;

    let root_not_found = PageTarget::new(plan.default_locale, Route::NotFound);
    let html = render_page(&ctx, &root_not_found);
    write(&mut summary, None, Path::new("404.html"), &html)?;

    write(&mut summary, None, Path::new(STYLESHEET_PATH), STYLESHEET)?;

    Ok(summary)
}
