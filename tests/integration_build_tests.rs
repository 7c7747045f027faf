//! # Static Build Integration Tests
//!
//! Builds the site into a temporary directory and inspects the tree.

mod common;

use bowl_collection::catalog::Catalog;
use bowl_collection::config::SiteConfig;
use bowl_collection::core::build::build_site;
use bowl_collection::render::STYLESHEET;
use bowl_collection::Locale;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_build_writes_every_page() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dist");
    let summary = build_site(Catalog::builtin(), &common::site_config(), &out).unwrap();

    // 11 pages per locale, the root redirect, the root 404 and the stylesheet
    assert_eq!(summary.page_count(), 25);
    assert_eq!(summary.pages_for(Locale::Es), 11);
    assert_eq!(summary.pages_for(Locale::En), 11);
    assert_eq!(summary.assets_copied, None);

    for relative in [
        "index.html",
        "404.html",
        "assets/site.css",
        "es/index.html",
        "es/products/index.html",
        "es/products/classic-list.html",
        "es/products/all-list.html",
        "es/collections/index.html",
        "es/404.html",
        "en/index.html",
        "en/products/colorful-grid.html",
    ] {
        assert!(out.join(relative).is_file(), "{} was not written", relative);
    }
    assert!(!out.join("es/products/all-grid.html").exists());

    let written: usize = summary.pages.iter().map(|page| page.bytes).sum();
    assert_eq!(summary.total_bytes(), written);
}

#[test]
fn test_built_pages_are_localized() {
    let dir = tempdir().unwrap();
    build_site(Catalog::builtin(), &common::site_config(), dir.path()).unwrap();

    let es = fs::read_to_string(dir.path().join("es/products/index.html")).unwrap();
    let en = fs::read_to_string(dir.path().join("en/products/index.html")).unwrap();
    assert!(es.contains("<html lang=\"es\">"));
    assert!(es.contains("Nuestra Colección de Productos"));
    assert!(en.contains("<html lang=\"en\">"));
    assert!(en.contains("Our Product Collection"));

    let root_404 = fs::read_to_string(dir.path().join("404.html")).unwrap();
    assert!(root_404.contains("¡Vaya! Página no encontrada"));
}

#[test]
fn test_build_copies_configured_assets() {
    let dir = tempdir().unwrap();
    let assets = dir.path().join("static");
    fs::create_dir_all(assets.join("images")).unwrap();
    fs::write(assets.join("images/product-2.jpg"), b"jpeg").unwrap();

    let config = SiteConfig {
        assets_dir: Some(assets),
        ..common::site_config()
    };
    let out = dir.path().join("out");
    let summary = build_site(Catalog::builtin(), &config, &out).unwrap();

    assert_eq!(summary.assets_copied, Some(4));
    assert!(out.join("assets/images/product-2.jpg").is_file());
    assert!(out.join("assets/site.css").is_file());
}

#[test]
fn test_generated_stylesheet_wins_over_asset_with_same_name() {
    let dir = tempdir().unwrap();
    let assets = dir.path().join("static");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("site.css"), "body { color: red; }").unwrap();
    fs::write(assets.join("extra.css"), "p {}").unwrap();

    let config = SiteConfig {
        assets_dir: Some(assets),
        ..common::site_config()
    };
    let out = dir.path().join("out");
    build_site(Catalog::builtin(), &config, &out).unwrap();

    assert_eq!(fs::read_to_string(out.join("assets/site.css")).unwrap(), STYLESHEET);
    assert!(out.join("assets/extra.css").is_file());
}

#[test]
fn test_missing_assets_dir_is_skipped() {
    let dir = tempdir().unwrap();
    let config = SiteConfig {
        assets_dir: Some(dir.path().join("does-not-exist")),
        ..common::site_config()
    };
    let summary = build_site(Catalog::builtin(), &config, &dir.path().join("out")).unwrap();
    assert_eq!(summary.assets_copied, None);
}
