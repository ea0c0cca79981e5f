//! Storefront configuration from the environment.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use courtside_core::{CategoryId, Money};
use courtside_query::QueryDefaults;

pub const PAGE_SIZE_VAR: &str = "COURTSIDE_PAGE_SIZE";
pub const DEALS_PAGE_SIZE_VAR: &str = "COURTSIDE_DEALS_PAGE_SIZE";
pub const PRICE_CEILING_VAR: &str = "COURTSIDE_PRICE_CEILING";
pub const DEFAULT_CATEGORY_VAR: &str = "COURTSIDE_DEFAULT_CATEGORY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub query: QueryDefaults,
}

impl StorefrontConfig {
    /// Read overrides from `COURTSIDE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an explicit variable source.
    ///
    /// Unset variables keep their default; invalid ones are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut query = QueryDefaults::default();

        if let Some(size) = read::<u32>(&lookup, PAGE_SIZE_VAR).filter(|n| valid_size(*n, PAGE_SIZE_VAR)) {
            query.listing_page_size = size;
        }
        if let Some(size) =
            read::<u32>(&lookup, DEALS_PAGE_SIZE_VAR).filter(|n| valid_size(*n, DEALS_PAGE_SIZE_VAR))
        {
            query.deals_page_size = size;
        }
        if let Some(raw) = lookup(PRICE_CEILING_VAR) {
            match Money::parse(&raw) {
                Ok(ceiling) => query.price_ceiling = ceiling,
                Err(e) => tracing::warn!(var = PRICE_CEILING_VAR, value = %raw, error = %e, "ignoring invalid setting"),
            }
        }
        if let Some(category) = read::<CategoryId>(&lookup, DEFAULT_CATEGORY_VAR) {
            query.default_category = category;
        }

        Self { query }
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(var)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(var, value = %raw, error = %e, "ignoring invalid setting");
            None
        }
    }
}

fn valid_size(size: u32, var: &'static str) -> bool {
    if size == 0 {
        tracing::warn!(var, "page size must be positive; using default");
    }
    size > 0
}
