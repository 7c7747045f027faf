//! # File System Operations Module
//!
//! Helpers for writing a static build: resolving configured paths, creating
//! the output tree, writing pages and copying static assets.

use anyhow::{Context, Result};
use fs_extra::dir::{copy, CopyOptions};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Expands `~` and environment variables in a configured path.
///
/// # Arguments
/// * `path` - Path as written in the configuration or on the command line
///
/// # Returns
/// The expanded path, or an error naming the undefined variable
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| t!("fs.expand_failed", path = raw).to_string())?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Creates the output directory if needed.
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
        t!("fs.create_dir_failed", path = output_dir.display()).to_string()
    })
}

/// Writes one file below `output_dir`, creating parent directories.
///
/// # Arguments
/// * `output_dir` - Root of the build
/// * `relative` - Path of the file relative to the root
/// * `contents` - File contents
///
/// # Returns
/// The full path of the written file
pub fn write_output_file(output_dir: &Path, relative: &Path, contents: &str) -> Result<PathBuf> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| t!("fs.create_dir_failed", path = parent.display()).to_string())?;
    }
    fs::write(&path, contents)
        .with_context(|| t!("fs.write_failed", path = path.display()).to_string())?;
    Ok(path)
}

/// Copies the entire content of a source directory into a destination directory.
///
/// # Returns
/// The number of bytes copied
pub fn copy_dir_all(from: &Path, to: &Path) -> Result<u64> {
    fs::create_dir_all(to)
        .with_context(|| t!("fs.create_dir_failed", path = to.display()).to_string())?;
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    let copied = copy(from, to, &options).with_context(|| {
        t!("fs.copy_failed", from = from.display(), to = to.display()).to_string()
    })?;
    Ok(copied)
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
