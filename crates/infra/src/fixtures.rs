//! JSON catalog fixtures for dev and tests.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use courtside_catalog::{Collection, Product};

use crate::catalog::InMemoryCatalogService;

/// Contents of a fixture file: `{ "collections": [...], "products": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogFixture {
    pub fn into_service(self) -> InMemoryCatalogService {
        InMemoryCatalogService::with_products(self.products).with_collections(self.collections)
    }
}

pub fn from_json_str(json: &str) -> anyhow::Result<CatalogFixture> {
    serde_json::from_str(json).context("failed to parse catalog fixture")
}

/// Read and parse a catalog fixture file.
pub fn load_fixture(path: impl AsRef<Path>) -> anyhow::Result<CatalogFixture> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    let fixture = from_json_str(&raw).with_context(|| format!("in fixture {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        collections = fixture.collections.len(),
        products = fixture.products.len(),
        "loaded catalog fixture"
    );
    Ok(fixture)
}

/// Build an in-memory catalog service from a fixture file.
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<InMemoryCatalogService> {
    Ok(load_fixture(path)?.into_service())
}
