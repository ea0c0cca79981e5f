//! Infrastructure layer: collaborators of the storefront core.
//!
//! In-memory implementations of the remote catalog service and the cart store
//! (for tests and local development), JSON catalog fixtures, and configuration
//! loading.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod fixtures;

pub use cart::{Availability, Cart, CartError, CartStore, InMemoryCartStore, LineItem};
pub use catalog::InMemoryCatalogService;
pub use config::StorefrontConfig;
