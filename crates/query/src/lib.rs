//! Catalog query & sort pipeline.
//!
//! Turns storefront filter/sort/pagination parameters into one remote catalog
//! query, then applies the local post-processing the remote service cannot
//! express:
//!
//! 1. remote query construction ([`RemoteQuery`]), native sort only for the
//!    allow-listed fields ([`is_natively_sortable`]);
//! 2. local fallback sort ([`fallback_sort`]);
//! 3. discount-only filter and discount ranking ([`retain_discounted`]);
//! 4. free-text brand filter ([`retain_brand`]).
//!
//! Pagination flags always come from the remote page, so a locally filtered
//! page may hold fewer than `page_size` items and still report a next page.

pub mod filters;
pub mod page;
pub mod params;
pub mod pipeline;
pub mod remote;
pub mod sort;

pub use filters::{retain_brand, retain_discounted};
pub use page::ResultPage;
pub use params::{CatalogQueryParams, PageContext, QueryDefaults, RawQueryParams};
pub use pipeline::{CatalogQueryPipeline, post_process};
pub use remote::{CatalogError, CatalogService, RemotePage, RemoteQuery, RemoteSort};
pub use sort::{
    LocalSortKey, NATIVE_SORT_FIELDS, SortDirection, SortSpec, fallback_sort, is_natively_sortable,
};
