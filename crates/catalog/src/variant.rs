use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use courtside_core::{Entity, VariantId};

/// Option name → chosen choice label.
pub type VariantChoices = BTreeMap<String, String>;

/// Stock information of a single variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl Stock {
    pub fn available(quantity: u32) -> Self {
        Self {
            in_stock: quantity > 0,
            quantity: Some(quantity),
        }
    }

    pub fn out_of_stock() -> Self {
        Self {
            in_stock: false,
            quantity: Some(0),
        }
    }

    /// Whether at least one unit can be sold.
    pub fn is_available(&self) -> bool {
        self.in_stock && self.quantity.is_some_and(|q| q > 0)
    }

    /// Units that can be put into a cart; 0 when not in stock.
    pub fn purchasable_quantity(&self) -> u32 {
        if self.in_stock { self.quantity.unwrap_or(0) } else { 0 }
    }
}

/// A concrete purchasable SKU: one choice per product option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    #[serde(default)]
    pub choices: VariantChoices,
    #[serde(default)]
    pub stock: Stock,
}

impl Variant {
    pub fn new<I, K, V>(id: VariantId, choices: I, stock: Stock) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id,
            choices: choices
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            stock,
        }
    }

    /// True when this variant carries every given `(option, choice)` pair.
    ///
    /// Options the variant does not define never agree.
    pub fn agrees_with<'a, I>(&self, pairs: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .all(|(option, choice)| self.choices.get(option).is_some_and(|c| c == choice))
    }

    /// True when the variant's full choice map is exactly `choices`.
    pub fn matches_exactly(&self, choices: &VariantChoices) -> bool {
        &self.choices == choices
    }
}

impl Entity for Variant {
    type Id = VariantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
