//! Product configurator: the variant resolution engine.
//!
//! Lets a shopper build a [`Selection`] one option at a time, reports which
//! choices are still purchasable, and resolves a complete selection to exactly
//! one [`Variant`](courtside_catalog::Variant). Everything here is a pure
//! function of the product data and the caller-owned selection state.

pub mod engine;
pub mod index;
pub mod purchase;
pub mod selection;
pub mod state;

pub use engine::{Resolution, UnresolvedReason, VariantResolver, validate_complete};
pub use index::AvailabilityIndex;
pub use purchase::{
    AddToCartBlocked, CartAddition, LOW_STOCK_THRESHOLD, QuantityPicker, StockStatus,
    prepare_add_to_cart,
};
pub use selection::Selection;
pub use state::{ChoiceView, ConfiguratorState, OptionView, option_views};
