//! # Build Command Module
//!
//! Implements `bowl-collection build`, which writes the full static site.

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use super::{load_config, Session};
use crate::core::build::build_site;
use crate::core::catalog::Catalog;
use crate::infra::t;
use crate::reporting::print_build_summary;

/// Executes the build command.
///
/// # Arguments
/// * `session` - Global command-line options
/// * `config` - Explicit configuration file, if given
/// * `output` - Output directory overriding the configured one
pub fn execute(session: &Session, config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let (site_config, locale) = load_config(session, config.as_deref())?;
    let output_dir = output.unwrap_or_else(|| site_config.output_dir.clone());

    if !session.quiet {
        println!(
            "{}",
            t!("build.start", locale = &locale, path = output_dir.display()).cyan()
        );
    }

    let summary = build_site(Catalog::builtin(), &site_config, &output_dir)?;

    if !session.quiet {
        if let (Some(assets_dir), None) = (&site_config.assets_dir, summary.assets_copied) {
            eprintln!(
                "{}",
                t!("build.assets_missing", locale = &locale, path = assets_dir.display()).yellow()
            );
        }
        print_build_summary(&summary, &locale);
    }

    Ok(())
}
