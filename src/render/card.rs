//! Product card markup.

use maud::{html, Markup};

use crate::core::card::ProductCard;
use crate::core::shell::AppContext;
use crate::render::icons::Icon;
use crate::render::image_href;

/// Lays out one resolved product card.
pub fn product_card(ctx: &AppContext<'_>, card: &ProductCard) -> Markup {
    html! {
        article class="product-card" data-product-id=(card.id) {
            div class="product-image" {
                img src=(image_href(ctx.config(), card.image)) alt=(card.name) loading="lazy";
                @if let Some(offer) = card.special_offer {
                    span class="badge badge-offer" { (offer) }
                }
                span class=(format!("badge badge-category {}", card.badge.class)) {
                    (card.category_label)
                }
            }
            div class="product-info" {
                ul class="feature-tags" {
                    @for feature in &card.features {
                        li class="feature-tag" {
                            (Icon::from(feature.icon).svg("icon-xs"))
                            span { (feature.label) }
                        }
                    }
                }
                h3 class="product-name" { (card.name) }
                p class="product-description" { (card.description) }
                div class="product-price" {
                    span class="price" { (card.price) }
                    @if let Some(original) = &card.original_price {
                        s class="price-original" { (original) }
                    }
                }
                button type="button" class="btn btn-secondary btn-block" { (card.view_details) }
            }
        }
    }
}
