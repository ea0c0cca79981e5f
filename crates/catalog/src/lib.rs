//! Catalog domain module.
//!
//! Read-only catalog entities as served by the remote commerce service:
//! products, their configurable options and the purchasable variants. Nothing
//! here performs IO.

pub mod collection;
pub mod option;
pub mod product;
pub mod rich_text;
pub mod variant;

pub use collection::Collection;
pub use option::{Choice, ProductOption};
pub use product::{AdditionalInfoSection, Media, PriceData, Product, ProductType};
pub use variant::{Stock, Variant, VariantChoices};
