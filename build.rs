//! # Build Script for the Site Text Table
//!
//! Parses the page text files in `locales/site/` and generates a type-safe
//! `I18nKey` enum plus one lookup function per locale. `en.toml` is the base
//! file; every other locale must define exactly the same keys, and no value
//! may be empty. Any violation aborts the build with the list of offending
//! keys, so a missing translation can never reach a rendered page.
//!
//! ## Generated Code
//!
//! - `I18nKey` enum with one variant per key, `I18nKey::ALL` and `I18nKey::as_str`
//! - `get_translation_<locale>()` for every `locales/site/<locale>.toml`

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the structure of a translation file.
/// Maps translation keys to their localized strings.
#[derive(Debug, Deserialize)]
struct Translations(BTreeMap<String, String>);

/// Converts a snake_case string to PascalCase.
/// Used to transform translation keys into enum variant names.
///
/// # Examples
/// ```ignore
/// assert_eq!(to_pascal_case("nav_home"), "NavHome");
/// assert_eq!(to_pascal_case("home_feature_1"), "HomeFeature1");
/// ```
fn to_pascal_case(s: &str) -> String {
    let mut pascal = String::with_capacity(s.len());
    let mut capitalize = true;

    for c in s.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            pascal.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            pascal.push(c);
        }
    }

    pascal
}

/// Compares a locale's key set against the base locale and collects every
/// problem found: keys missing from the locale, keys unknown to the base, and
/// empty values.
fn validate_locale(
    lang_code: &str,
    base_keys: &BTreeSet<&String>,
    translations: &Translations,
) -> Vec<String> {
    let keys: BTreeSet<&String> = translations.0.keys().collect();
    let mut problems = Vec::new();

    for missing in base_keys.difference(&keys) {
        problems.push(format!("{lang_code}: missing key '{missing}'"));
    }
    for extra in keys.difference(base_keys) {
        problems.push(format!("{lang_code}: key '{extra}' is not defined in en.toml"));
    }
    for (key, value) in &translations.0 {
        if value.trim().is_empty() {
            problems.push(format!("{lang_code}: key '{key}' has an empty value"));
        }
    }

    problems
}

/// Generates the site text table.
///
/// # Process
/// 1. Read all .toml files from `locales/site`
/// 2. Parse the base language file (en.toml) to extract all keys
/// 3. Validate every locale against the base key set
/// 4. Generate the key enum and one lookup function per locale
/// 5. Write the generated code to the output directory
fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest_path = Path::new(&out_dir).join("site_text.rs");

    let locales_dir = Path::new("locales").join("site");

    let mut lang_files: Vec<PathBuf> = fs::read_dir(&locales_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml"))
        .collect();
    lang_files.sort();

    let base_content = fs::read_to_string(locales_dir.join("en.toml"))?;
    let base_translations: Translations =
        toml::from_str(&base_content).expect("Failed to parse locales/site/en.toml");
    let base_keys: BTreeSet<&String> = base_translations.0.keys().collect();

    let pascal_case_keys: BTreeMap<_, _> = base_translations
        .0
        .keys()
        .map(|key| (key.clone(), to_pascal_case(key)))
        .collect();

    let mut parsed = Vec::with_capacity(lang_files.len());
    let mut problems = Vec::new();
    for path in &lang_files {
        let lang_code = path
            .file_stem()
            .and_then(|s| s.to_str())
            .expect("locale file name must be valid UTF-8")
            .to_string();
        let content = fs::read_to_string(path)?;
        let translations: Translations = toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e));
        problems.extend(validate_locale(&lang_code, &base_keys, &translations));
        parsed.push((lang_code, translations));
    }

    if !problems.is_empty() {
        panic!(
            "site text table is inconsistent:\n  {}",
            problems.join("\n  ")
        );
    }

    let mut final_code = String::new();

    writeln!(
        &mut final_code,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\npub enum I18nKey {{"
    )
    .unwrap();
    for pascal_name in pascal_case_keys.values() {
        writeln!(&mut final_code, "    {},", pascal_name).unwrap();
    }
    writeln!(&mut final_code, "}}\n").unwrap();

    writeln!(&mut final_code, "impl I18nKey {{").unwrap();
    writeln!(&mut final_code, "    pub const ALL: &'static [I18nKey] = &[").unwrap();
    for pascal_name in pascal_case_keys.values() {
        writeln!(&mut final_code, "        I18nKey::{},", pascal_name).unwrap();
    }
    writeln!(&mut final_code, "    ];\n").unwrap();
    writeln!(&mut final_code, "    pub fn as_str(self) -> &'static str {{").unwrap();
    writeln!(&mut final_code, "        match self {{").unwrap();
    for (key, pascal_name) in &pascal_case_keys {
        writeln!(&mut final_code, "            I18nKey::{} => {:?},", pascal_name, key).unwrap();
    }
    writeln!(&mut final_code, "        }}\n    }}\n}}\n").unwrap();

    for (lang_code, translations) in &parsed {
        let fn_lang_code = lang_code.replace('-', "_").to_lowercase();
        writeln!(
            &mut final_code,
            "pub fn get_translation_{}(key: I18nKey) -> &'static str {{",
            fn_lang_code
        )
        .unwrap();
        writeln!(&mut final_code, "    match key {{").unwrap();
        for (key, value) in &translations.0 {
            if let Some(pascal_key) = pascal_case_keys.get(key) {
                writeln!(
                    &mut final_code,
                    "        I18nKey::{} => {:?},",
                    pascal_key, value
                )
                .unwrap();
            }
        }
        writeln!(&mut final_code, "    }}\n}}\n").unwrap();
    }

    fs::write(&dest_path, final_code)?;
    println!("cargo:rerun-if-changed=locales/site");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
