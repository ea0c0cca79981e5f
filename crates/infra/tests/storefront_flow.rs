//! End-to-end storefront flows over the bundled fixture catalog.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use courtside_catalog::{PriceData, Product};
use courtside_configurator::{
    ConfiguratorState, QuantityPicker, StockStatus, VariantResolver, option_views,
    prepare_add_to_cart,
};
use courtside_core::{Money, ProductId};
use courtside_infra::{CartStore, InMemoryCartStore, InMemoryCatalogService, StorefrontConfig, fixtures};
use courtside_query::{CatalogQueryPipeline, PageContext, QueryDefaults, RawQueryParams};

fn fixture_catalog() -> InMemoryCatalogService {
    courtside_observability::init();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/catalog.json");
    fixtures::load_catalog(path).unwrap()
}

fn shirt(catalog: &InMemoryCatalogService) -> Product {
    let id: ProductId = "0191d3a2-7c4e-7a10-9b3f-5a6c2d1e8f10".parse().unwrap();
    catalog.product(&id).unwrap()
}

fn names(items: &[Product]) -> Vec<&str> {
    items.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn configure_shirt_and_add_to_cart() {
    let catalog = Arc::new(fixture_catalog());
    let product = shirt(&catalog);
    let resolver = VariantResolver::for_product(&product);

    let state = ConfiguratorState::new().select_choice("Color", "Red");
    let views = option_views(&resolver, &state);
    let size = views.iter().find(|v| v.name == "Size").unwrap();
    let enabled: Vec<(&str, bool)> = size.choices.iter().map(|c| (c.label.as_str(), c.enabled)).collect();
    assert_eq!(enabled, [("S", false), ("M", true)]);

    let state = state.select_choice("Size", "M");
    let resolution = resolver.resolve_variant(state.selection());
    assert_eq!(resolution.purchasable_quantity(), 5);
    assert_eq!(StockStatus::from_quantity(5).label(), "Only 5 items left!");

    let picker = QuantityPicker::new(resolution.purchasable_quantity()).increment();
    let (_, addition) = prepare_add_to_cart(product.id, &resolver, state, picker.quantity());
    let addition = addition.unwrap();

    let store = InMemoryCartStore::new(Arc::clone(&catalog));
    let cart = store.add_item(addition).await.unwrap();
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.subtotal(), Money::from_cents(9_998));
    assert_eq!(cart.subtotal().format(), "C$99.98");
}

#[tokio::test]
async fn deals_page_lists_only_discounted_products_by_discount() {
    let pipeline = CatalogQueryPipeline::new(fixture_catalog());
    let page = pipeline.run_raw(&RawQueryParams::default(), PageContext::Deals).await;
    assert_eq!(names(&page.items), ["Thruster Ryuga II", "Aerosensa 30 Shuttles"]);
}

#[tokio::test]
async fn discount_only_drops_equal_prices() {
    let mut full = Product::new(ProductId::new(), "full");
    full.price_data = PriceData::discounted(Money::from_cents(10_000), Money::from_cents(10_000));
    full.collection_ids = vec![QueryDefaults::default().default_category];
    let mut half = Product::new(ProductId::new(), "half");
    half.price_data = PriceData::discounted(Money::from_cents(8_000), Money::from_cents(4_000));
    half.collection_ids = vec![QueryDefaults::default().default_category];

    let pipeline = CatalogQueryPipeline::new(InMemoryCatalogService::with_products(vec![full, half]));
    let page = pipeline.run_raw(&RawQueryParams::default(), PageContext::Deals).await;
    assert_eq!(names(&page.items), ["half"]);
}

#[tokio::test]
async fn price_sort_falls_back_locally() {
    let pipeline = CatalogQueryPipeline::new(fixture_catalog().without_native_sort());
    let raw = RawQueryParams { sort: Some("asc price".into()), ..Default::default() };

    let page = pipeline.run_raw(&raw, PageContext::Listing).await;
    assert_eq!(page.len(), 5);
    for pair in page.items.windows(2) {
        assert!(pair[0].price_data.effective_price() <= pair[1].price_data.effective_price());
    }
    assert_eq!(page.items[0].name, "Stringing Guide");
}

#[tokio::test]
async fn newest_first_uses_created_date() {
    let pipeline = CatalogQueryPipeline::new(fixture_catalog().without_native_sort());
    let raw = RawQueryParams { sort: Some("desc createdDate".into()), ..Default::default() };

    let page = pipeline.run_raw(&raw, PageContext::Listing).await;
    let newest = Utc.with_ymd_and_hms(2024, 4, 20, 9, 0, 0).unwrap();
    assert_eq!(page.items[0].created_date, Some(newest));
    assert_eq!(page.items[4].name, "Aerosensa 30 Shuttles");
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let pipeline = CatalogQueryPipeline::new(fixture_catalog());
    let raw = RawQueryParams { page: Some("2".into()), limit: Some("8".into()), ..Default::default() };

    let page = pipeline.run_raw(&raw, PageContext::Listing).await;
    assert!(page.is_empty());
    assert!(page.has_prev);
    assert!(!page.has_next);
}

#[tokio::test]
async fn outage_renders_empty_page() {
    let catalog = Arc::new(fixture_catalog());
    let pipeline = CatalogQueryPipeline::new(Arc::clone(&catalog));
    catalog.set_available(false);

    let page = pipeline.run_raw(&RawQueryParams::default(), PageContext::Listing).await;
    assert!(page.is_empty());
    assert!(!page.has_next);
}

#[tokio::test]
async fn brand_filter_and_configured_page_size() {
    let config = StorefrontConfig::from_lookup(|key| (key == "COURTSIDE_PAGE_SIZE").then(|| "2".to_string()));
    let pipeline = CatalogQueryPipeline::with_defaults(fixture_catalog(), config.query);

    let raw = RawQueryParams {
        brand: Some("VICTOR".into()),
        limit: Some("10".into()),
        ..Default::default()
    };
    let page = pipeline.run_raw(&raw, PageContext::Listing).await;
    assert_eq!(names(&page.items), ["Thruster Ryuga II"]);

    let page = pipeline.run_raw(&RawQueryParams::default(), PageContext::Listing).await;
    assert_eq!(page.len(), 2);
    assert!(page.has_next);
}

#[tokio::test]
async fn category_slug_filters_listing() {
    let pipeline = CatalogQueryPipeline::new(fixture_catalog());

    let rackets = RawQueryParams { category: Some("badminton-rackets".into()), ..Default::default() };
    let page = pipeline.run_raw(&rackets, PageContext::Listing).await;
    let mut found = names(&page.items);
    found.sort();
    assert_eq!(found, ["Astrox 88D Pro", "Thruster Ryuga II"]);

    let deals = pipeline.run_raw(&rackets, PageContext::Deals).await;
    assert_eq!(names(&deals.items), ["Thruster Ryuga II"]);

    let unknown = RawQueryParams { category: Some("croquet".into()), ..Default::default() };
    let page = pipeline.run_raw(&unknown, PageContext::Listing).await;
    assert_eq!(page.len(), 5);
}
