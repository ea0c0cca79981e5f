//! Query parameter normalization.
//!
//! Storefront parameters arrive as free-form strings (URL query values, form
//! inputs). Normalization never fails: anything malformed falls back to its
//! default.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use courtside_catalog::ProductType;
use courtside_core::{CategoryId, Money};

use crate::sort::SortSpec;

/// Collection used when no (valid) category is requested: "All Products".
pub const ALL_PRODUCTS_CATEGORY: CategoryId = CategoryId::from_uuid(Uuid::from_u128(1));

/// Upper price bound used when none is requested, in major units.
pub const DEFAULT_PRICE_CEILING: u64 = 99_999_999;

/// Defaults applied during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDefaults {
    pub listing_page_size: u32,
    pub deals_page_size: u32,
    pub max_page_size: u32,
    pub price_ceiling: Money,
    pub default_category: CategoryId,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            listing_page_size: 16,
            deals_page_size: 12,
            max_page_size: 100,
            price_ceiling: Money::from_cents(DEFAULT_PRICE_CEILING * 100),
            default_category: ALL_PRODUCTS_CATEGORY,
        }
    }
}

/// Page the query is issued for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageContext {
    /// Category listing with filters.
    #[default]
    Listing,
    /// Best-deals page: discounted products only, ranked by discount.
    Deals,
}

impl PageContext {
    pub fn page_size(self, defaults: &QueryDefaults) -> u32 {
        match self {
            Self::Listing => defaults.listing_page_size,
            Self::Deals => defaults.deals_page_size,
        }
    }

    pub fn discount_only(self) -> bool {
        matches!(self, Self::Deals)
    }
}

/// Parameters exactly as received, before normalization.
///
/// `cat` holds either a collection id or a collection slug. Slugs need the
/// catalog service to resolve and are handled by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQueryParams {
    #[serde(default, rename = "cat")]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Normalized catalog query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQueryParams {
    pub category_id: CategoryId,
    pub name_prefix: String,
    pub price_min: Money,
    pub price_max: Money,
    pub product_types: Vec<ProductType>,
    pub brand: Option<String>,
    pub sort: Option<SortSpec>,
    pub page: u32,
    pub page_size: u32,
    pub discount_only: bool,
}

impl CatalogQueryParams {
    /// Parameters with every default applied.
    pub fn defaults(context: PageContext, defaults: &QueryDefaults) -> Self {
        Self {
            category_id: defaults.default_category,
            name_prefix: String::new(),
            price_min: Money::ZERO,
            price_max: defaults.price_ceiling,
            product_types: ProductType::ALL.to_vec(),
            brand: None,
            sort: None,
            page: 0,
            page_size: context.page_size(defaults),
            discount_only: context.discount_only(),
        }
    }

    pub fn normalize(raw: &RawQueryParams, context: PageContext, defaults: &QueryDefaults) -> Self {
        let mut params = Self::defaults(context, defaults);

        if let Some(category) = non_empty(raw.category.as_deref()).and_then(|s| s.parse::<CategoryId>().ok()) {
            params.category_id = category;
        }
        if let Some(name) = non_empty(raw.name.as_deref()) {
            params.name_prefix = name.to_string();
        }
        if let Some(t) = parse_field(raw.product_type.as_deref(), "type", ProductType::parse) {
            params.product_types = vec![t];
        }
        if let Some(min) = parse_field(raw.min.as_deref(), "min", |s| Money::parse(s).ok()) {
            params.price_min = min;
        }
        if let Some(max) = parse_field(raw.max.as_deref(), "max", |s| Money::parse(s).ok()) {
            params.price_max = max;
        }
        if let Some(sort) = parse_field(raw.sort.as_deref(), "sort", SortSpec::parse) {
            params.sort = Some(sort);
        }
        if let Some(page) = parse_field(raw.page.as_deref(), "page", |s| s.parse::<u32>().ok()) {
            params.page = page;
        }
        if let Some(limit) = parse_field(raw.limit.as_deref(), "limit", |s| {
            s.parse::<u32>().ok().filter(|n| *n > 0)
        }) {
            params.page_size = limit.min(defaults.max_page_size);
        }
        params.brand = non_empty(raw.brand.as_deref()).map(str::to_string);

        params
    }
}

impl RawQueryParams {
    /// The `cat` value when it is a slug rather than a collection id.
    pub fn category_slug(&self) -> Option<&str> {
        non_empty(self.category.as_deref()).filter(|s| s.parse::<CategoryId>().is_err())
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_field<T>(raw: Option<&str>, field: &'static str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let value = non_empty(raw)?;
    let parsed = parse(value);
    if parsed.is_none() {
        tracing::debug!(field, value, "ignoring malformed query parameter");
    }
    parsed
}
