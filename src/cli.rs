// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::{CategoryFilter, Locale, ViewMode};
use crate::detect_cli_language;
use crate::infra::t;

pub mod commands;

use commands::Session;

const CATEGORY_VALUES: [&str; 4] = ["all", "minimalist", "colorful", "classic"];
const LOCALE_VALUES: [&str; 2] = ["es", "en"];
const VIEW_VALUES: [&str; 2] = ["grid", "list"];

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It accepts both `--lang <VALUE>` and `--lang=<VALUE>`.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(value) = args.iter().find_map(|arg| arg.strip_prefix("--lang=")) {
        return Some(value.to_string());
    }
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

fn config_arg(locale: &str) -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("arg_config", locale = locale).to_string())
        .value_name("CONFIG")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn locale_arg(locale: &str) -> Arg {
    Arg::new("locale")
        .short('l')
        .long("locale")
        .help(t!("arg_locale", locale = locale).to_string())
        .value_name("LOCALE")
        .value_parser(LOCALE_VALUES)
        .action(ArgAction::Set)
}

fn category_arg(locale: &str) -> Arg {
    Arg::new("category")
        .long("category")
        .help(t!("arg_category", locale = locale).to_string())
        .value_name("CATEGORY")
        .default_value("all")
        .value_parser(CATEGORY_VALUES)
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("bowl-collection")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help(t!("cli_quiet", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("build")
                .about(t!("cmd_build_about", locale = locale).to_string())
                .arg(config_arg(locale))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("render")
                .about(t!("cmd_render_about", locale = locale).to_string())
                .arg(
                    Arg::new("path")
                        .help(t!("arg_path", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value("/")
                        .action(ArgAction::Set),
                )
                .arg(config_arg(locale))
                .arg(locale_arg(locale))
                .arg(category_arg(locale))
                .arg(
                    Arg::new("view")
                        .long("view")
                        .help(t!("arg_view", locale = locale).to_string())
                        .value_name("VIEW")
                        .default_value("grid")
                        .value_parser(VIEW_VALUES)
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about(t!("cmd_catalog_about", locale = locale).to_string())
                .arg(config_arg(locale))
                .arg(locale_arg(locale))
                .arg(category_arg(locale))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg_json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn parse_locale(matches: &ArgMatches) -> Result<Option<Locale>> {
    matches
        .get_one::<String>("locale")
        .map(|value| value.parse::<Locale>())
        .transpose()
}

fn parse_category(matches: &ArgMatches) -> Result<CategoryFilter> {
    match matches.get_one::<String>("category") {
        Some(value) => value.parse(),
        None => Ok(CategoryFilter::All),
    }
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let explicit_lang = pre_parse_language();
    let language = explicit_lang
        .clone()
        .unwrap_or_else(detect_cli_language);
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let session = Session {
        explicit_lang,
        detected_lang: language,
        quiet: matches.get_flag("quiet"),
    };

    match matches.subcommand() {
        Some(("build", build_matches)) => {
            let config = build_matches.get_one::<PathBuf>("config").cloned();
            let output = build_matches.get_one::<PathBuf>("output").cloned();
            commands::build::execute(&session, config, output)?;
        }
        Some(("render", render_matches)) => {
            let path = render_matches
                .get_one::<String>("path")
                .cloned()
                .unwrap_or_else(|| "/".to_string());
            let config = render_matches.get_one::<PathBuf>("config").cloned();
            let locale = parse_locale(render_matches)?;
            let category = parse_category(render_matches)?;
            let view = match render_matches.get_one::<String>("view") {
                Some(value) => value.parse::<ViewMode>()?,
                None => ViewMode::default(),
            };
            commands::render::execute(&session, config, &path, locale, category, view)?;
        }
        Some(("catalog", catalog_matches)) => {
            let config = catalog_matches.get_one::<PathBuf>("config").cloned();
            let locale = parse_locale(catalog_matches)?;
            let category = parse_category(catalog_matches)?;
            let json = catalog_matches.get_flag("json");
            commands::catalog::execute(&session, config, category, locale, json)?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let force = init_matches.get_flag("force");

            // Show language detection message if it was auto-detected
            if session.explicit_lang.is_none() && !session.quiet {
                println!(
                    "🌐 {}",
                    t!(
                        "system_language_detected",
                        locale = &session.detected_lang,
                        lang = &session.detected_lang
                    )
                );
            }
            commands::init::execute(&session, non_interactive, force)?;
        }
        _ => {
            // `arg_required_else_help` has already printed help info.
        }
    }
    Ok(())
}
