use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use courtside_core::{CategoryId, Entity, Money, ProductId};

use crate::option::ProductOption;
use crate::rich_text::{normalize_title, strip_markup};
use crate::variant::Variant;

/// Image shown when a product has no media.
pub const PLACEHOLDER_IMAGE: &str = "/product.png";

/// Kind of product as classified by the commerce service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Physical,
    Digital,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Physical, ProductType::Digital];

    /// Case-insensitive parse; `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "physical" => Some(Self::Physical),
            "digital" => Some(Self::Digital),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
        }
    }
}

/// List and sale price of a product.
///
/// Both amounts are optional because the commerce service may omit them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceData {
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub discounted_price: Option<Money>,
}

impl PriceData {
    pub fn regular(price: Money) -> Self {
        Self {
            price: Some(price),
            discounted_price: Some(price),
        }
    }

    pub fn discounted(price: Money, discounted_price: Money) -> Self {
        Self {
            price: Some(price),
            discounted_price: Some(discounted_price),
        }
    }

    /// Price the shopper pays: the sale price when present, else the list price.
    pub fn effective_price(&self) -> Money {
        self.discounted_price.or(self.price).unwrap_or(Money::ZERO)
    }

    /// Both amounts present and the sale price strictly below the list price.
    pub fn is_discounted(&self) -> bool {
        matches!((self.price, self.discounted_price), (Some(p), Some(d)) if d < p)
    }

    /// `(price − discounted) / price × 100`, only for discounted products.
    pub fn discount_percent(&self) -> Option<f64> {
        match (self.price, self.discounted_price) {
            (Some(p), Some(d)) if d < p => {
                let price = p.as_major();
                Some((price - d.as_major()) / price * 100.0)
            }
            _ => None,
        }
    }

    /// Badge text such as `"50% OFF"`, rounded to a whole percent.
    pub fn discount_badge(&self) -> Option<String> {
        self.discount_percent()
            .map(|pct| format!("{}% OFF", pct.round() as u32))
    }
}

/// Product imagery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Media {
    pub fn primary_image(&self) -> &str {
        self.main_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Second gallery image, shown on hover in listings.
    pub fn hover_image(&self) -> &str {
        self.items.get(1).map(String::as_str).unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Rich-text key/description pair ("Brand", "Short Desc", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfoSection {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl AdditionalInfoSection {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A catalog product as returned by the commerce service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub price_data: PriceData,
    #[serde(default)]
    pub stock_quantity: Option<u32>,
    #[serde(default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub collection_ids: Vec<CategoryId>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub product_options: Vec<ProductOption>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub media: Media,
    #[serde(default)]
    pub additional_info_sections: Vec<AdditionalInfoSection>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            slug: slugify(&name),
            name,
            ..Self::default()
        }
    }

    /// Description of the first section whose normalized title is `key`.
    pub fn info_section(&self, key: &str) -> Option<&str> {
        let key = normalize_title(key);
        self.additional_info_sections
            .iter()
            .find(|s| normalize_title(&s.title) == key)
            .map(|s| s.description.as_str())
    }

    /// Brand as plain text, taken from the "Brand" info section.
    pub fn brand(&self) -> Option<String> {
        self.info_section("brand").map(strip_markup)
    }

    /// Short description as plain text, taken from the "Short Desc" info section.
    pub fn short_description(&self) -> Option<String> {
        self.info_section("shortdesc").map(strip_markup)
    }

    pub fn belongs_to(&self, category: CategoryId) -> bool {
        self.collection_ids.contains(&category)
    }

    /// Whether the product needs the shopper to pick options before purchase.
    pub fn is_configurable(&self) -> bool {
        !self.product_options.is_empty()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
