//! In-memory catalog service.

use std::cmp::Ordering;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use courtside_catalog::{Collection, Product};
use courtside_core::{ProductId, entity::find_by_id};
use courtside_query::{CatalogError, CatalogService, RemotePage, RemoteQuery, RemoteSort};

/// In-memory stand-in for the remote commerce service.
///
/// Intended for tests/dev. Filters by scanning every product.
#[derive(Debug)]
pub struct InMemoryCatalogService {
    products: RwLock<Vec<Product>>,
    collections: RwLock<Vec<Collection>>,
    native_sort: bool,
    available: AtomicBool,
}

impl Default for InMemoryCatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalogService {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            collections: RwLock::new(Vec::new()),
            native_sort: true,
            available: AtomicBool::new(true),
        }
    }

    pub fn with_collections(self, collections: Vec<Collection>) -> Self {
        Self {
            collections: RwLock::new(collections),
            ..self
        }
    }

    /// Ignore requested sorts, like a backend that cannot sort some fields.
    pub fn without_native_sort(mut self) -> Self {
        self.native_sort = false;
        self
    }

    /// Simulate an outage: every query fails while unavailable.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, AtomicOrdering::SeqCst);
    }

    pub fn insert(&self, product: Product) {
        if let Ok(mut products) = self.products.write() {
            products.retain(|p| p.id != product.id);
            products.push(product);
        }
    }

    pub fn insert_collection(&self, collection: Collection) {
        if let Ok(mut collections) = self.collections.write() {
            collections.retain(|c| c.id != collection.id);
            collections.push(collection);
        }
    }

    pub fn product(&self, id: &ProductId) -> Option<Product> {
        let products = self.products.read().ok()?;
        find_by_id(&products, id).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn matches(product: &Product, query: &RemoteQuery, prefix: &str) -> bool {
        // Products without a list price never satisfy a range filter.
        let in_range = product
            .price_data
            .price
            .is_some_and(|p| p > query.price_above && p < query.price_below);

        product.belongs_to(query.category_id)
            && product.name.to_lowercase().starts_with(prefix)
            && query.product_types.contains(&product.product_type)
            && in_range
    }

    /// Remote-side ordering: by list price, not the sale price.
    fn compare(sort: &RemoteSort, a: &Product, b: &Product) -> Ordering {
        let ordering = match sort.field.as_str() {
            "price" | "priceData.price" => a.price_data.price.cmp(&b.price_data.price),
            "name" => a.name.cmp(&b.name),
            "createdDate" => a.created_date.cmp(&b.created_date),
            _ => Ordering::Equal,
        };
        sort.direction.apply(ordering)
    }
}

#[async_trait::async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn query_products(&self, query: &RemoteQuery) -> Result<RemotePage, CatalogError> {
        if !self.available.load(AtomicOrdering::SeqCst) {
            return Err(CatalogError::Unavailable("catalog service is offline".to_string()));
        }

        let products = self
            .products
            .read()
            .map_err(|_| CatalogError::Unavailable("lock poisoned".to_string()))?;

        let prefix = query.name_prefix.to_lowercase();
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|p| Self::matches(p, query, &prefix))
            .cloned()
            .collect();

        if let (true, Some(sort)) = (self.native_sort, &query.sort) {
            matching.sort_by(|a, b| Self::compare(sort, a, b));
        }

        let total = matching.len() as u64;
        let start = usize::try_from(query.offset.min(total)).unwrap_or(usize::MAX);
        let items: Vec<Product> = matching
            .into_iter()
            .skip(start)
            .take(query.limit as usize)
            .collect();

        let page = RemotePage {
            current_page: query.page(),
            has_prev: query.offset > 0,
            has_next: query.offset.saturating_add(u64::from(query.limit)) < total,
            items,
        };

        tracing::debug!(
            total,
            offset = query.offset,
            returned = page.items.len(),
            "served catalog page"
        );
        Ok(page)
    }

    async fn collection_by_slug(&self, slug: &str) -> Result<Option<Collection>, CatalogError> {
        if !self.available.load(AtomicOrdering::SeqCst) {
            return Err(CatalogError::Unavailable("catalog service is offline".to_string()));
        }

        let collections = self
            .collections
            .read()
            .map_err(|_| CatalogError::Unavailable("lock poisoned".to_string()))?;
        Ok(collections.iter().find(|c| c.has_slug(slug)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_catalog::{PriceData, ProductType};
    use courtside_core::{CategoryId, Money};
    use courtside_query::{CatalogQueryParams, PageContext, QueryDefaults, RawQueryParams};

    fn product(name: &str, cents: u64, category: CategoryId) -> Product {
        let mut p = Product::new(ProductId::new(), name);
        p.price_data = PriceData::regular(Money::from_cents(cents));
        p.collection_ids = vec![category];
        p
    }

    fn query(raw: RawQueryParams) -> RemoteQuery {
        RemoteQuery::from_params(&CatalogQueryParams::normalize(
            &raw,
            PageContext::Listing,
            &QueryDefaults::default(),
        ))
    }

    fn all_products() -> CategoryId {
        QueryDefaults::default().default_category
    }

    #[tokio::test]
    async fn filters_by_prefix_category_type_and_exclusive_range() {
        let all = all_products();
        let other = CategoryId::new();
        let mut ebook = product("Astrox Guide", 1_500, all);
        ebook.product_type = ProductType::Digital;

        let svc = InMemoryCatalogService::with_products(vec![
            product("Astrox 88D", 20_000, all),
            product("astrox 77", 15_000, all),
            product("Arcsaber 11", 18_000, all),
            product("Astrox 99", 22_000, other),
            product("Astrox Lite", 5_000, all),
            ebook,
        ]);

        let page = svc
            .query_products(&query(RawQueryParams {
                name: Some("Astrox".into()),
                product_type: Some("physical".into()),
                min: Some("50".into()),
                max: Some("200".into()),
                ..Default::default()
            }))
            .await
            .unwrap();

        let mut names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        names.sort();
        // 50.00 is excluded by the strict lower bound, 200.00 by the strict upper bound.
        assert_eq!(names, ["astrox 77"]);
    }

    #[tokio::test]
    async fn pages_with_offset_and_flags() {
        let all = all_products();
        let products = (0..5).map(|i| product(&format!("P{i}"), 1_000 + i, all)).collect();
        let svc = InMemoryCatalogService::with_products(products);

        let first = svc
            .query_products(&query(RawQueryParams { limit: Some("2".into()), ..Default::default() }))
            .await
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let last = svc
            .query_products(&query(RawQueryParams {
                page: Some("2".into()),
                limit: Some("2".into()),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.current_page, 2);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[tokio::test]
    async fn native_sort_uses_list_price_and_can_be_disabled() {
        let all = all_products();
        let mut on_sale = product("on-sale", 9_000, all);
        on_sale.price_data = PriceData::discounted(Money::from_cents(9_000), Money::from_cents(1_000));
        let products = vec![on_sale, product("mid", 5_000, all)];

        let q = query(RawQueryParams { sort: Some("asc price".into()), ..Default::default() });

        let sorted = InMemoryCatalogService::with_products(products.clone());
        let page = sorted.query_products(&q).await.unwrap();
        assert_eq!(page.items[0].name, "mid");

        let unsorted = InMemoryCatalogService::with_products(products).without_native_sort();
        let page = unsorted.query_products(&q).await.unwrap();
        assert_eq!(page.items[0].name, "on-sale");
        assert_eq!(page.items[1].name, "mid");
    }

    #[tokio::test]
    async fn offline_service_reports_unavailable() {
        let svc = InMemoryCatalogService::new();
        svc.set_available(false);
        let err = svc.query_products(&query(RawQueryParams::default())).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[tokio::test]
    async fn finds_collection_by_slug() {
        let shuttles = Collection::new(CategoryId::new(), "Shuttles");
        let svc = InMemoryCatalogService::new().with_collections(vec![shuttles.clone()]);

        assert_eq!(svc.collection_by_slug("SHUTTLES").await.unwrap(), Some(shuttles));
        assert_eq!(svc.collection_by_slug("strings").await.unwrap(), None);

        svc.set_available(false);
        assert!(svc.collection_by_slug("shuttles").await.is_err());
    }

    #[test]
    fn insert_replaces_same_id() {
        let svc = InMemoryCatalogService::new();
        let mut p = product("Grip", 500, all_products());
        svc.insert(p.clone());
        p.name = "Towel Grip".into();
        svc.insert(p.clone());
        assert_eq!(svc.len(), 1);
        assert_eq!(svc.product(&p.id).unwrap().name, "Towel Grip");
    }
}
