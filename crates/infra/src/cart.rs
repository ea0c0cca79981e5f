//! Cart contract and an in-memory cart store.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use courtside_configurator::CartAddition;
use courtside_core::{Entity, LineItemId, Money, ProductId, VariantId, entity::find_by_id};

use crate::catalog::InMemoryCatalogService;

/// Whether a line can still be checked out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    #[default]
    Available,
    OutOfStock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub availability: Availability,
}

impl LineItem {
    pub fn total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub line_items: Vec<LineItem>,
}

impl Cart {
    pub fn subtotal(&self) -> Money {
        self.line_items.iter().map(LineItem::total).sum()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn line(&self, id: &LineItemId) -> Option<&LineItem> {
        find_by_id(&self.line_items, id)
    }
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("line item not found: {0}")]
    LineNotFound(LineItemId),

    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("unknown variant: {0}")]
    UnknownVariant(VariantId),

    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("cart store unavailable: {0}")]
    Unavailable(String),
}

/// Cart persistence capability.
///
/// Only accepts a [`CartAddition`], which the configurator hands out after
/// resolving the selection to one purchasable variant.
#[async_trait::async_trait]
pub trait CartStore: Send + Sync {
    async fn add_item(&self, addition: CartAddition) -> Result<Cart, CartError>;

    async fn remove_item(&self, line_id: LineItemId) -> Result<Cart, CartError>;

    async fn get_cart(&self) -> Result<Cart, CartError>;

    async fn item_count(&self) -> Result<u32, CartError> {
        Ok(self.get_cart().await?.item_count())
    }
}

#[async_trait::async_trait]
impl<S> CartStore for Arc<S>
where
    S: CartStore + ?Sized,
{
    async fn add_item(&self, addition: CartAddition) -> Result<Cart, CartError> {
        (**self).add_item(addition).await
    }

    async fn remove_item(&self, line_id: LineItemId) -> Result<Cart, CartError> {
        (**self).remove_item(line_id).await
    }

    async fn get_cart(&self) -> Result<Cart, CartError> {
        (**self).get_cart().await
    }

    async fn item_count(&self) -> Result<u32, CartError> {
        (**self).item_count().await
    }
}

/// In-memory cart backed by an [`InMemoryCatalogService`] for prices and stock.
///
/// Intended for tests/dev.
#[derive(Debug)]
pub struct InMemoryCartStore {
    catalog: Arc<InMemoryCatalogService>,
    cart: RwLock<Cart>,
}

impl InMemoryCartStore {
    pub fn new(catalog: Arc<InMemoryCatalogService>) -> Self {
        Self {
            catalog,
            cart: RwLock::new(Cart::default()),
        }
    }

    fn poisoned() -> CartError {
        CartError::Unavailable("lock poisoned".to_string())
    }

    /// Availability of a line against current catalog stock.
    fn availability_of(&self, line: &LineItem) -> Availability {
        let purchasable = self
            .catalog
            .product(&line.product_id)
            .and_then(|p| find_by_id(&p.variants, &line.variant_id).map(|v| v.stock.purchasable_quantity()))
            .unwrap_or(0);
        if purchasable < line.quantity {
            Availability::OutOfStock
        } else {
            Availability::Available
        }
    }
}

#[async_trait::async_trait]
impl CartStore for InMemoryCartStore {
    async fn add_item(&self, addition: CartAddition) -> Result<Cart, CartError> {
        let product = self
            .catalog
            .product(&addition.product_id())
            .ok_or(CartError::UnknownProduct(addition.product_id()))?;
        let variant = find_by_id(&product.variants, &addition.variant_id())
            .ok_or(CartError::UnknownVariant(addition.variant_id()))?;
        let available = variant.stock.purchasable_quantity();

        let mut cart = self.cart.write().map_err(|_| Self::poisoned())?;

        // Repeated additions of one variant share a line; stock bounds the sum.
        let existing = cart
            .line_items
            .iter()
            .position(|l| l.variant_id == variant.id);
        let already = existing.map(|i| cart.line_items[i].quantity).unwrap_or(0);
        let requested = already.saturating_add(addition.quantity());
        if requested > available {
            return Err(CartError::InsufficientStock { requested, available });
        }

        match existing {
            Some(i) => cart.line_items[i].quantity = requested,
            None => cart.line_items.push(LineItem {
                id: LineItemId::new(),
                product_id: product.id,
                variant_id: variant.id,
                product_name: product.name.clone(),
                unit_price: product.price_data.effective_price(),
                quantity: requested,
                availability: Availability::Available,
            }),
        }

        tracing::info!(
            product_id = %product.id,
            variant_id = %variant.id,
            quantity = addition.quantity(),
            items = cart.item_count(),
            "added to cart"
        );
        Ok(cart.clone())
    }

    async fn remove_item(&self, line_id: LineItemId) -> Result<Cart, CartError> {
        let mut cart = self.cart.write().map_err(|_| Self::poisoned())?;
        let before = cart.line_items.len();
        cart.line_items.retain(|l| l.id != line_id);
        if cart.line_items.len() == before {
            return Err(CartError::LineNotFound(line_id));
        }
        Ok(cart.clone())
    }

    /// Returns the cart with each line's availability refreshed from stock.
    async fn get_cart(&self) -> Result<Cart, CartError> {
        let mut cart = self.cart.write().map_err(|_| Self::poisoned())?;
        for line in cart.line_items.iter_mut() {
            let availability = self.availability_of(line);
            if availability != line.availability {
                tracing::info!(line_id = %line.id, ?availability, "cart line availability changed");
                line.availability = availability;
            }
        }
        Ok(cart.clone())
    }
}
