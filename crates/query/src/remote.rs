//! Remote catalog query descriptor and the catalog service contract.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use courtside_catalog::{Collection, Product, ProductType};
use courtside_core::{CategoryId, Money};

use crate::params::CatalogQueryParams;
use crate::sort::{SortDirection, SortSpec};

/// Sort the remote service is asked to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSort {
    pub field: String,
    pub direction: SortDirection,
}

/// One paged query against the remote catalog.
///
/// Price bounds are exclusive on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteQuery {
    pub category_id: CategoryId,
    /// Name prefix; empty matches every product.
    pub name_prefix: String,
    pub product_types: Vec<ProductType>,
    pub price_above: Money,
    pub price_below: Money,
    pub offset: u64,
    pub limit: u32,
    pub sort: Option<RemoteSort>,
}

impl RemoteQuery {
    /// Stage 1: translate normalized parameters into the remote query.
    ///
    /// A requested sort is forwarded only when its field is natively sortable.
    pub fn from_params(params: &CatalogQueryParams) -> Self {
        let sort = params
            .sort
            .as_ref()
            .filter(|s| s.is_native())
            .map(|SortSpec { direction, field }| RemoteSort {
                field: field.clone(),
                direction: *direction,
            });

        Self {
            category_id: params.category_id,
            name_prefix: params.name_prefix.clone(),
            product_types: params.product_types.clone(),
            price_above: params.price_min,
            price_below: params.price_max,
            offset: u64::from(params.page) * u64::from(params.page_size),
            limit: params.page_size,
            sort,
        }
    }

    /// Page index this query addresses.
    pub fn page(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        u32::try_from(self.offset / u64::from(self.limit)).unwrap_or(u32::MAX)
    }
}

/// One page of products as returned by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemotePage {
    pub items: Vec<Product>,
    pub current_page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Failure reported by a catalog service implementation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog service unavailable: {0}")]
    Unavailable(String),
}

/// Remote paged product query capability.
///
/// Implementations must support prefix name matching, membership filters,
/// exclusive numeric range filters and offset/limit paging. Sorting is honored
/// on a best-effort basis; the pipeline re-sorts locally.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    async fn query_products(&self, query: &RemoteQuery) -> Result<RemotePage, CatalogError>;

    /// Look up a collection by its URL slug. `Ok(None)` when no collection has it.
    async fn collection_by_slug(&self, slug: &str) -> Result<Option<Collection>, CatalogError>;
}

#[async_trait::async_trait]
impl<S> CatalogService for Arc<S>
where
    S: CatalogService + ?Sized,
{
    async fn query_products(&self, query: &RemoteQuery) -> Result<RemotePage, CatalogError> {
        (**self).query_products(query).await
    }

    async fn collection_by_slug(&self, slug: &str) -> Result<Option<Collection>, CatalogError> {
        (**self).collection_by_slug(slug).await
    }
}
