//! # Init Command Module
//!
//! Implements `bowl-collection init`, which writes a `Site.toml` either from
//! an interactive wizard or straight from the built-in defaults.

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fs;
use std::path::{Path, PathBuf};

use super::Session;
use crate::core::config::{normalize_base_path, SiteConfig, CONFIG_FILE_NAME};
use crate::core::locale::Locale;
use crate::infra::t;

/// Executes the init command.
///
/// # Arguments
/// * `session` - Global command-line options
/// * `non_interactive` - Write the defaults without prompting
/// * `force` - Overwrite an existing `Site.toml`
pub fn execute(session: &Session, non_interactive: bool, force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);
    let language = session.explicit_lang.clone();

    let config = if non_interactive {
        if path.exists() && !force {
            println!("{}", t!("init.file_exists", path = path.display()).red());
            println!("{}", t!("init.use_force").yellow());
            return Ok(());
        }
        SiteConfig {
            language,
            ..SiteConfig::default()
        }
    } else {
        match run_wizard(path, force, language)? {
            Some(config) => config,
            None => {
                println!("{}", t!("init.aborted").yellow());
                return Ok(());
            }
        }
    };

    write_config(path, &config)?;

    if !session.quiet {
        println!(
            "\n{} {}",
            "✔".green(),
            t!("init.success", path = path.display()).bold()
        );
        println!("{}", t!("init.next_steps"));
    }
    Ok(())
}

/// Serializes `config` and writes it to `path`.
pub fn write_config(path: &Path, config: &SiteConfig) -> Result<()> {
    let toml_string = config
        .to_toml()
        .context(t!("init.serialize_failed").to_string())?;
    fs::write(path, toml_string)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())
}

/// Prompts for the common settings. Returns `None` when the user declines to
/// overwrite an existing file.
fn run_wizard(path: &Path, force: bool, language: Option<String>) -> Result<Option<SiteConfig>> {
    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init.welcome").bold().cyan());
    println!("{}\n", t!("init.description"));

    if path.exists() && !force {
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(t!("init.confirm_overwrite", path = path.display()).to_string())
            .default(false)
            .interact()?;
        if !overwrite {
            return Ok(None);
        }
    }

    let defaults = SiteConfig::default();

    let locale_labels: Vec<&str> = Locale::ALL.iter().map(|locale| locale.code()).collect();
    let default_index = Locale::ALL
        .iter()
        .position(|locale| *locale == defaults.default_locale)
        .unwrap_or(0);
    let selected = Select::with_theme(&theme)
        .with_prompt(t!("init.prompt_default_locale").to_string())
        .items(&locale_labels)
        .default(default_index)
        .interact()?;

    let base_path: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_base_path").to_string())
        .default(defaults.base_path.clone())
        .interact_text()?;

    let output_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_output_dir").to_string())
        .default(defaults.output_dir.display().to_string())
        .interact_text()?;

    let email: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_email").to_string())
        .default(defaults.contact.email.clone())
        .interact_text()?;

    let phone: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_phone").to_string())
        .default(defaults.contact.phone.clone())
        .interact_text()?;

    let mut config = SiteConfig {
        language,
        default_locale: Locale::ALL[selected],
        base_path: normalize_base_path(&base_path),
        output_dir: PathBuf::from(output_dir),
        ..defaults
    };
    config.contact.email = email;
    config.contact.phone = phone;

    Ok(Some(config))
}
