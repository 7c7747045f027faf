use bowl_collection::catalog::{Catalog, CategoryFilter};
use bowl_collection::config::SiteConfig;
use bowl_collection::core::planner::{plan_site, PageTarget};
use bowl_collection::core::products_view::ProductsView;
use bowl_collection::core::shell::AppContext;
use bowl_collection::render::render_page;
use bowl_collection::Locale;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_filter_products(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    c.bench_function("filter_products", |b| {
        b.iter(|| {
            for filter in CategoryFilter::ALL {
                black_box(catalog.filter(black_box(filter)));
            }
        });
    });
}

fn bench_render_products_page(c: &mut Criterion) {
    let config = SiteConfig::default();
    let ctx = AppContext::new(Catalog::builtin(), &config);
    let target = PageTarget::products(Locale::En, ProductsView::default());

    c.bench_function("render_products_page", |b| {
        b.iter(|| render_page(&ctx, black_box(&target)));
    });
}

fn bench_render_site(c: &mut Criterion) {
    let config = SiteConfig::default();
    let ctx = AppContext::new(Catalog::builtin(), &config);
    let plan = plan_site(&config);

    c.bench_function("render_site", |b| {
        b.iter(|| {
            for target in &plan.pages {
                black_box(render_page(&ctx, target));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_filter_products,
    bench_render_products_page,
    bench_render_site
);
criterion_main!(benches);
