//! The query pipeline: one remote fetch, then deterministic local stages.

use courtside_catalog::Product;
use courtside_core::CategoryId;

use crate::filters::{retain_brand, retain_discounted};
use crate::page::ResultPage;
use crate::params::{CatalogQueryParams, PageContext, QueryDefaults, RawQueryParams};
use crate::remote::{CatalogService, RemoteQuery};
use crate::sort::fallback_sort;

/// Stages 2–4 over an already fetched page of products.
///
/// Order matters: the discount ranking runs after the fallback sort and
/// therefore wins over any requested sort.
pub fn post_process(mut items: Vec<Product>, params: &CatalogQueryParams) -> Vec<Product> {
    if let Some(spec) = &params.sort {
        if fallback_sort(&mut items, spec) {
            tracing::debug!(field = %spec.field, native = spec.is_native(), "applied local sort");
        }
    }

    if params.discount_only {
        retain_discounted(&mut items);
    }

    if let Some(brand) = &params.brand {
        retain_brand(&mut items, brand);
    }

    items
}

/// Runs catalog queries against a [`CatalogService`].
#[derive(Debug, Clone)]
pub struct CatalogQueryPipeline<S> {
    service: S,
    defaults: QueryDefaults,
}

impl<S: CatalogService> CatalogQueryPipeline<S> {
    pub fn new(service: S) -> Self {
        Self::with_defaults(service, QueryDefaults::default())
    }

    pub fn with_defaults(service: S, defaults: QueryDefaults) -> Self {
        Self { service, defaults }
    }

    pub fn defaults(&self) -> &QueryDefaults {
        &self.defaults
    }

    /// Normalize raw storefront parameters, resolve a collection slug, then
    /// [`run`](Self::run).
    pub async fn run_raw(&self, raw: &RawQueryParams, context: PageContext) -> ResultPage {
        let mut params = CatalogQueryParams::normalize(raw, context, &self.defaults);
        if let Some(slug) = raw.category_slug() {
            params.category_id = self.resolve_collection(slug).await;
        }
        self.run(&params).await
    }

    /// Collection id for `slug`; the default category when unknown or unreachable.
    pub async fn resolve_collection(&self, slug: &str) -> CategoryId {
        match self.service.collection_by_slug(slug).await {
            Ok(Some(collection)) => collection.id,
            Ok(None) => {
                tracing::debug!(slug, "unknown collection slug; using default category");
                self.defaults.default_category
            }
            Err(e) => {
                tracing::warn!(slug, error = %e, "collection lookup failed; using default category");
                self.defaults.default_category
            }
        }
    }

    /// Fetch one remote page and post-process it.
    ///
    /// Never fails: a remote error is logged and rendered as an empty page.
    pub async fn run(&self, params: &CatalogQueryParams) -> ResultPage {
        let query = RemoteQuery::from_params(params);

        let mut remote = match self.service.query_products(&query).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, page = params.page, "catalog query failed; rendering empty page");
                return ResultPage::empty(params.page);
            }
        };

        let fetched = remote.items.len();
        let items = post_process(std::mem::take(&mut remote.items), params);
        tracing::info!(
            page = remote.current_page,
            fetched,
            returned = items.len(),
            has_next = remote.has_next,
            "catalog query complete"
        );

        ResultPage::from_remote(&remote, items)
    }
}
