//! # Page Shell Markup
//!
//! The document frame every page shares: head, navbar with the language
//! toggle and mobile menu, and the footer.

use maud::{html, Markup, DOCTYPE};

use crate::core::locale::Locale;
use crate::core::planner::PageTarget;
use crate::core::shell::{AppContext, Route};
use crate::core::text::I18nKey;
use crate::render::icons::Icon;
use crate::render::STYLESHEET_PATH;

const GENERATOR: &str = concat!("bowl-collection ", env!("CARGO_PKG_VERSION"));

/// Wraps page content in the full HTML document.
pub fn document(ctx: &AppContext<'_>, target: &PageTarget, content: Markup) -> Markup {
    let locale = ctx.locale();
    html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(ctx.text(I18nKey::FooterBlurb));
                meta name="generator" content=(GENERATOR);
                title { (ctx.route().title(locale)) }
                link rel="stylesheet" href=(ctx.config().href(STYLESHEET_PATH));
                @for other in Locale::ALL {
                    @if other != locale {
                        link rel="alternate"
                            hreflang=(other.code())
                            href=(target.in_locale(other).href(ctx.config()));
                    }
                }
            }
            body class=(format!("page page-{}", route_class(ctx.route()))) {
                (navbar(ctx, target))
                main class="page-main" { (content) }
                (footer(ctx))
            }
        }
    }
}

fn route_class(route: Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::Products => "products",
        Route::Collections => "collections",
        Route::NotFound => "not-found",
    }
}

fn nav_links(ctx: &AppContext<'_>) -> Markup {
    let locale = ctx.locale();
    html! {
        @for route in Route::NAVIGABLE {
            @let class = if ctx.route() == route { "nav-link active" } else { "nav-link" };
            a class=(class) href=(PageTarget::new(locale, route).href(ctx.config())) {
                (ctx.text(route.nav_key()))
            }
        }
    }
}

/// The language toggle links to the current page in the other locale.
fn language_toggle(ctx: &AppContext<'_>, target: &PageTarget) -> Markup {
    let other = ctx.locale().toggle();
    html! {
        a class="language-toggle"
            href=(target.in_locale(other).href(ctx.config()))
            hreflang=(other.code())
            title=(ctx.text(I18nKey::NavLanguageToggle))
            aria-label=(ctx.text(I18nKey::NavLanguageToggle)) {
            (Icon::Globe.svg("icon-sm"))
            span class="language-code" { (ctx.locale().code().to_uppercase()) }
        }
    }
}

fn cta_button(ctx: &AppContext<'_>) -> Markup {
    let href = PageTarget::new(ctx.locale(), Route::Products).href(ctx.config());
    html! {
        a class="btn btn-hero" href=(href) {
            (ctx.text(I18nKey::NavCta))
        }
    }
}

pub fn navbar(ctx: &AppContext<'_>, target: &PageTarget) -> Markup {
    let home = PageTarget::new(ctx.locale(), Route::Home).href(ctx.config());
    html! {
        nav class="navbar" {
            div class="container navbar-inner" {
                a class="brand" href=(home) { (ctx.text(I18nKey::BrandName)) }
                div class="nav-links desktop-only" { (nav_links(ctx)) }
                div class="nav-actions desktop-only" {
                    (language_toggle(ctx, target))
                    (cta_button(ctx))
                }
                details class="mobile-menu mobile-only" open[ctx.is_menu_open()] {
                    summary aria-label=(ctx.text(I18nKey::NavMenu)) { (Icon::Menu.svg("icon-md")) }
                    div class="mobile-menu-panel" {
                        (nav_links(ctx))
                        div class="mobile-menu-actions" {
                            (language_toggle(ctx, target))
                            (cta_button(ctx))
                        }
                    }
                }
            }
        }
    }
}

pub fn footer(ctx: &AppContext<'_>) -> Markup {
    let config = ctx.config();
    let locale = ctx.locale();
    let social = [
        (Icon::Instagram, "Instagram", config.social.instagram.as_str()),
        (Icon::Facebook, "Facebook", config.social.facebook.as_str()),
        (Icon::Twitter, "Twitter", config.social.twitter.as_str()),
    ];
    html! {
        footer class="footer" {
            div class="container footer-grid" {
                div class="footer-brand" {
                    h3 { (ctx.text(I18nKey::BrandName)) }
                    p { (ctx.text(I18nKey::FooterBlurb)) }
                }
                div class="footer-contact" {
                    h4 { (ctx.text(I18nKey::FooterContact)) }
                    ul {
                        li title=(ctx.text(I18nKey::FooterEmail)) {
                            (Icon::Mail.svg("icon-sm"))
                            a href=(config.contact.email_href()) { (config.contact.email) }
                        }
                        li title=(ctx.text(I18nKey::FooterPhone)) {
                            (Icon::Phone.svg("icon-sm"))
                            a href=(config.contact.phone_href()) { (config.contact.phone) }
                        }
                        li title=(ctx.text(I18nKey::FooterAddress)) {
                            (Icon::MapPin.svg("icon-sm"))
                            span { (ctx.text(I18nKey::FooterAddressValue)) }
                        }
                    }
                }
                div class="footer-navigation" {
                    h4 { (ctx.text(I18nKey::FooterNavigation)) }
                    ul {
                        @for route in Route::NAVIGABLE {
                            li {
                                a href=(PageTarget::new(locale, route).href(config)) {
                                    (ctx.text(route.nav_key()))
                                }
                            }
                        }
                    }
                }
                div class="footer-social" {
                    h4 { (ctx.text(I18nKey::FooterFollowUs)) }
                    div class="social-links" {
                        @for (icon, label, href) in social {
                            a class="social-link" href=(href) aria-label=(label) {
                                (icon.svg("icon-md"))
                            }
                        }
                    }
                }
            }
            div class="container footer-bottom" {
                p {
                    "© " (config.year()) " " (ctx.text(I18nKey::BrandName)) ". "
                    (ctx.text(I18nKey::FooterRights))
                }
            }
        }
    }
}
