//! Sort specification, native-sort capability and the local fallback sort.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use courtside_catalog::Product;

/// Fields the remote catalog service can sort on by itself.
pub const NATIVE_SORT_FIELDS: [&str; 4] = ["name", "price", "priceData.price", "createdDate"];

/// Whether the remote service executes a sort on `field` natively.
pub fn is_natively_sortable(field: &str) -> bool {
    NATIVE_SORT_FIELDS.contains(&field)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Requested ordering: direction plus the raw field name (`"asc price"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub direction: SortDirection,
    pub field: String,
}

impl SortSpec {
    pub fn new(direction: SortDirection, field: impl Into<String>) -> Self {
        Self {
            direction,
            field: field.into(),
        }
    }

    /// Parse `"<asc|desc> <field>"`; `None` when either part is missing or the
    /// direction is unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split_whitespace();
        let direction = SortDirection::parse(parts.next()?)?;
        let field = parts.next()?;
        Some(Self::new(direction, field))
    }

    pub fn is_native(&self) -> bool {
        is_natively_sortable(&self.field)
    }

    pub fn local_key(&self) -> Option<LocalSortKey> {
        LocalSortKey::for_field(&self.field)
    }
}

/// Fields the pipeline can order locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalSortKey {
    /// `discounted_price ?? price ?? 0`.
    Price,
    /// Case-insensitive name.
    Name,
    /// Creation timestamp, missing dates count as the epoch.
    CreatedDate,
}

impl LocalSortKey {
    pub fn for_field(field: &str) -> Option<Self> {
        match field {
            "price" | "priceData.price" => Some(Self::Price),
            "name" => Some(Self::Name),
            "createdDate" | "_createdDate" => Some(Self::CreatedDate),
            _ => None,
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Price => a
                .price_data
                .effective_price()
                .cmp(&b.price_data.effective_price()),
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::CreatedDate => created_millis(a).cmp(&created_millis(b)),
        }
    }
}

fn created_millis(product: &Product) -> i64 {
    product
        .created_date
        .map(|d| d.timestamp_millis())
        .unwrap_or(0)
}

/// Order `items` locally by `spec`. Stable, so re-sorting is a no-op.
///
/// Returns whether a sort was performed: fewer than two items or a field
/// without a local comparator leave the remote order untouched.
pub fn fallback_sort(items: &mut [Product], spec: &SortSpec) -> bool {
    if items.len() < 2 {
        return false;
    }
    let Some(key) = spec.local_key() else {
        tracing::debug!(field = %spec.field, "no local comparator for sort field; keeping remote order");
        return false;
    };

    items.sort_by(|a, b| spec.direction.apply(key.compare(a, b)));
    true
}
