//! Add-to-cart guard, quantity picker and stock messaging.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use courtside_core::{ProductId, VariantId};

use crate::engine::{Resolution, UnresolvedReason, VariantResolver};
use crate::state::ConfiguratorState;

/// Below this many units the storefront warns that stock is running low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Stock messaging for a purchasable quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    Low(u32),
    InStock,
}

impl StockStatus {
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => Self::OutOfStock,
            n if n < LOW_STOCK_THRESHOLD => Self::Low(n),
            _ => Self::InStock,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::OutOfStock => "Out of stock".to_string(),
            Self::Low(n) => format!("Only {n} items left!"),
            Self::InStock => "In stock".to_string(),
        }
    }
}

/// Quantity stepper bounded to `[1, stock]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityPicker {
    quantity: u32,
    stock: u32,
}

impl QuantityPicker {
    pub fn new(stock: u32) -> Self {
        Self { quantity: 1, stock }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.stock
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1 && self.stock > 0
    }

    pub fn increment(mut self) -> Self {
        if self.can_increment() {
            self.quantity += 1;
        }
        self
    }

    pub fn decrement(mut self) -> Self {
        if self.can_decrement() {
            self.quantity -= 1;
        }
        self
    }

    /// Re-bound after the resolved variant (and thus the stock) changed.
    pub fn with_stock(self, stock: u32) -> Self {
        Self {
            quantity: self.quantity.min(stock).max(1),
            stock,
        }
    }
}

/// A cart addition that passed every local check.
///
/// Only [`prepare_add_to_cart`] creates one, so a cart store receiving it never
/// sees an unresolved or sold-out variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartAddition {
    product_id: ProductId,
    variant_id: VariantId,
    quantity: u32,
}

impl CartAddition {
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn variant_id(&self) -> VariantId {
        self.variant_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Why an add-to-cart was blocked locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddToCartBlocked {
    #[error("choose a value for: {}", .0.join(", "))]
    Incomplete(Vec<String>),

    #[error("this combination is unavailable")]
    Unavailable,

    #[error("out of stock")]
    OutOfStock,

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("only {available} items left")]
    ExceedsStock { available: u32 },
}

/// Check the configurator state and build a [`CartAddition`].
///
/// Returns the state with "required" flags raised when options are missing.
pub fn prepare_add_to_cart(
    product_id: ProductId,
    resolver: &VariantResolver<'_>,
    state: ConfiguratorState,
    quantity: u32,
) -> (ConfiguratorState, Result<CartAddition, AddToCartBlocked>) {
    let state = state.validate(resolver.options());
    if !state.missing().is_empty() {
        let missing = state.missing().to_vec();
        return (state, Err(AddToCartBlocked::Incomplete(missing)));
    }

    let result = match resolver.resolve_variant(state.selection()) {
        Resolution::Resolved(variant) => {
            let available = variant.stock.purchasable_quantity();
            if available == 0 {
                Err(AddToCartBlocked::OutOfStock)
            } else if quantity == 0 {
                Err(AddToCartBlocked::InvalidQuantity)
            } else if quantity > available {
                Err(AddToCartBlocked::ExceedsStock { available })
            } else {
                Ok(CartAddition {
                    product_id,
                    variant_id: variant.id,
                    quantity,
                })
            }
        }
        Resolution::Unresolved(UnresolvedReason::Incomplete(missing)) => {
            Err(AddToCartBlocked::Incomplete(missing))
        }
        Resolution::Unresolved(_) => Err(AddToCartBlocked::Unavailable),
    };

    if let Err(reason) = &result {
        tracing::debug!(%product_id, %reason, "add to cart blocked");
    }

    (state, result)
}
