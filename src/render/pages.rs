//! # Page Views
//!
//! Home, Products, Collections and the not-found page. Each view reads the
//! locale, catalog and configuration from the shell context and returns the
//! page body; the document frame is added by [`crate::render::render_page`].

use maud::{html, Markup};

use crate::core::card::ProductCard;
use crate::core::catalog::{collections, CategoryFilter, Collection};
use crate::core::planner::PageTarget;
use crate::core::products_view::{Listing, ProductsView, ViewMode};
use crate::core::shell::{AppContext, Route};
use crate::core::text::I18nKey;
use crate::render::card::product_card;
use crate::render::icons::Icon;
use crate::render::image_href;

const HOME_FEATURES: [I18nKey; 4] = [
    I18nKey::HomeFeature1,
    I18nKey::HomeFeature2,
    I18nKey::HomeFeature3,
    I18nKey::HomeFeature4,
];

const VIEW_TOGGLES: [(ViewMode, Icon, I18nKey); 2] = [
    (ViewMode::Grid, Icon::Grid, I18nKey::ViewGrid),
    (ViewMode::List, Icon::List, I18nKey::ViewList),
];

fn products_href(ctx: &AppContext<'_>, view: ProductsView) -> String {
    PageTarget::products(ctx.locale(), view).href(ctx.config())
}

pub fn home(ctx: &AppContext<'_>) -> Markup {
    let all_products = products_href(ctx, ProductsView::default());
    let featured = ctx
        .catalog()
        .featured()
        .map(|product| ProductCard::new(product, ctx.locale()));

    html! {
        section class="hero" {
            div class="container hero-grid" {
                div class="hero-text" {
                    h1 class="text-hero" { (ctx.text(I18nKey::HomeHeroTitle)) }
                    p class="text-body-large" { (ctx.text(I18nKey::HomeHeroSubtitle)) }
                    a class="btn btn-hero" href=(all_products) {
                        (ctx.text(I18nKey::HomeExploreCta))
                        (Icon::ArrowRight.svg("icon-md"))
                    }
                    h2 class="visually-hidden" { (ctx.text(I18nKey::HomeFeaturesTitle)) }
                    ul class="hero-features" {
                        @for key in HOME_FEATURES {
                            li {
                                span class="check-circle" { (Icon::Check.svg("icon-sm")) }
                                span { (ctx.text(key)) }
                            }
                        }
                    }
                }
                div class="hero-media" {
                    img src=(image_href(ctx.config(), "hero-bowl.jpg"))
                        alt=(ctx.text(I18nKey::HomeHeroAlt));
                    div class="floating-card" {
                        (Icon::Star.svg("icon-md"))
                        div {
                            div class="floating-card-title" { (ctx.text(I18nKey::HomeWeekend)) }
                            div class="floating-card-value" { (ctx.text(I18nKey::HomeDiscount)) }
                        }
                    }
                }
            }
        }
        section class="collection-preview" {
            div class="container" {
                div class="section-header" {
                    h2 class="text-heading" { (ctx.text(I18nKey::HomeCollectionTitle)) }
                    p class="text-body-large" { (ctx.text(I18nKey::HomeCollectionSubtitle)) }
                }
                div class="preview-grid" {
                    @if let Some(card) = &featured {
                        article class="product-card featured-set" {
                            div class="product-image" {
                                img src=(image_href(ctx.config(), card.image))
                                    alt=(card.name)
                                    loading="lazy";
                            }
                            div class="product-info" {
                                h3 class="text-subheading" {
                                    (ctx.text(I18nKey::HomeFeaturedTitle))
                                }
                                p { (ctx.text(I18nKey::HomeFeaturedDescription)) }
                                div class="product-price" {
                                    span class="price" { (card.price) }
                                    a class="btn btn-secondary" href=(all_products) {
                                        (card.view_details)
                                    }
                                }
                            }
                        }
                    }
                    div class="discover-more" {
                        h3 class="text-heading" { (ctx.text(I18nKey::HomeDiscoverTitle)) }
                        p { (ctx.text(I18nKey::HomeDiscoverText)) }
                        a class="btn btn-hero" href=(all_products) {
                            (ctx.text(I18nKey::HomeViewAll))
                            (Icon::ArrowRight.svg("icon-md"))
                        }
                    }
                }
            }
        }
    }
}

fn listing_class(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "product-grid view-grid",
        ViewMode::List => "product-grid view-list",
    }
}

pub fn products(ctx: &AppContext<'_>, view: ProductsView) -> Markup {
    let locale = ctx.locale();
    let listing = view.listing(ctx.catalog());

    html! {
        section class="products-page" {
            div class="container" {
                div class="section-header" {
                    h1 class="text-heading" { (ctx.text(I18nKey::ProductsTitle)) }
                    p class="text-body-large" { (ctx.text(I18nKey::ProductsSubtitle)) }
                }
                div class="products-toolbar" {
                    nav class="category-filters" {
                        @for filter in CategoryFilter::ALL {
                            @let active = filter == view.category;
                            @let class = if active { "chip active" } else { "chip" };
                            a class=(class)
                                href=(products_href(ctx, view.with_category(filter)))
                                data-filter=(filter.as_str()) {
                                (ctx.text(filter.label_key()))
                            }
                        }
                    }
                    div class="view-toggle" {
                        @for (mode, icon, label) in VIEW_TOGGLES {
                            @let active = mode == view.mode;
                            @let class = if active { "view-button active" } else { "view-button" };
                            a class=(class)
                                href=(products_href(ctx, view.with_mode(mode)))
                                title=(ctx.text(label))
                                aria-label=(ctx.text(label)) {
                                (icon.svg("icon-sm"))
                            }
                        }
                    }
                }
                @match &listing {
                    Listing::Items(items) => {
                        div class=(listing_class(view.mode)) data-view-mode=(view.mode.as_str()) {
                            @for product in items {
                                (product_card(ctx, &ProductCard::new(product, locale)))
                            }
                        }
                    }
                    Listing::NoMatches(category) => {
                        div class="empty-state empty-filter" data-category=(category.as_str()) {
                            p { (ctx.text(I18nKey::ProductsNoMatches)) }
                            a class="btn btn-secondary"
                                href=(products_href(ctx, view.with_category(CategoryFilter::All))) {
                                (ctx.text(I18nKey::ProductsShowAll))
                            }
                        }
                    }
                    Listing::EmptyCatalog => {
                        div class="empty-state empty-catalog" {
                            p { (ctx.text(I18nKey::ProductsCatalogEmpty)) }
                        }
                    }
                }
            }
        }
    }
}

/// One collection of the overview. The featured card spans two columns and
/// uses the larger heading and the primary button.
fn collection_card(ctx: &AppContext<'_>, collection: &Collection, featured: bool) -> Markup {
    let view = ProductsView::default().with_category(collection.category.into());
    let href = PageTarget::products(ctx.locale(), view).href(ctx.config());
    let (card_class, title_class, button_class) = if featured {
        ("product-card collection-card featured", "text-heading", "btn btn-hero")
    } else {
        ("product-card collection-card", "text-subheading", "btn btn-secondary")
    };
    let title = ctx.text(collection.title);

    html! {
        article class=(card_class) data-collection=(collection.category.as_str()) {
            div class=(format!("collection-image {}", collection.gradient)) {
                img src=(image_href(ctx.config(), collection.image)) alt=(title) loading="lazy";
            }
            div class="collection-content" {
                span class=(format!("collection-items {}", collection.accent)) {
                    (ctx.text(collection.items))
                }
                h3 class=(title_class) { (title) }
                p { (ctx.text(collection.description)) }
                a class=(button_class) href=(href) {
                    (ctx.text(I18nKey::CollectionsView))
                    (Icon::ArrowRight.svg("icon-sm"))
                }
            }
        }
    }
}

pub fn collections_page(ctx: &AppContext<'_>) -> Markup {
    let all_products = products_href(ctx, ProductsView::default());

    html! {
        section class="collections-page" {
            div class="container" {
                div class="section-header" {
                    h1 class="text-heading" { (ctx.text(I18nKey::CollectionsTitle)) }
                    p class="text-body-large" { (ctx.text(I18nKey::CollectionsSubtitle)) }
                }
                div class="collections-grid" {
                    @for (index, collection) in collections().iter().enumerate() {
                        (collection_card(ctx, collection, index == 0))
                    }
                }
                div class="collections-cta" {
                    h2 class="text-heading" { (ctx.text(I18nKey::CollectionsCtaTitle)) }
                    p class="text-body-large" { (ctx.text(I18nKey::CollectionsCtaText)) }
                    div class="cta-actions" {
                        a class="btn btn-hero" href=(all_products) {
                            (ctx.text(I18nKey::CollectionsCtaAll))
                            (Icon::ArrowRight.svg("icon-md"))
                        }
                        a class="btn btn-secondary" href=(ctx.config().contact.email_href()) {
                            (ctx.text(I18nKey::CollectionsCtaContact))
                        }
                    }
                }
            }
        }
    }
}

pub fn not_found(ctx: &AppContext<'_>) -> Markup {
    let home = PageTarget::new(ctx.locale(), Route::Home).href(ctx.config());
    html! {
        section class="not-found" {
            div class="container" {
                h1 class="text-hero" { (ctx.text(I18nKey::NotFoundTitle)) }
                p class="text-body-large" { (ctx.text(I18nKey::NotFoundMessage)) }
                a class="btn btn-hero" href=(home) { (ctx.text(I18nKey::NotFoundHome)) }
            }
        }
    }
}
