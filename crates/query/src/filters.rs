//! Local filters the remote query cannot express.

use courtside_catalog::Product;

/// Keep only products whose sale price is strictly below the list price and
/// rank them by discount percentage, largest first.
///
/// The ranking replaces whatever order the items had, including an explicitly
/// requested sort.
pub fn retain_discounted(items: &mut Vec<Product>) {
    let before = items.len();
    items.retain(|p| p.price_data.is_discounted());
    items.sort_by(|a, b| discount_of(b).total_cmp(&discount_of(a)));
    tracing::debug!(before, after = items.len(), "applied discount-only filter");
}

fn discount_of(product: &Product) -> f64 {
    product.price_data.discount_percent().unwrap_or(0.0)
}

/// Keep only products whose "Brand" info section, stripped of markup, equals
/// `brand` ignoring case and surrounding whitespace. No substring matching.
///
/// A blank `brand` filters nothing.
pub fn retain_brand(items: &mut Vec<Product>, brand: &str) {
    let wanted = brand.trim().to_lowercase();
    if wanted.is_empty() {
        return;
    }
    let before = items.len();
    items.retain(|p| {
        p.brand()
            .is_some_and(|b| b.trim().to_lowercase() == wanted)
    });
    tracing::debug!(brand = %wanted, before, after = items.len(), "applied brand filter");
}
