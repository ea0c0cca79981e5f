//! Choice availability and variant resolution.

use courtside_catalog::{Product, ProductOption, Variant};

use crate::selection::Selection;

/// Why a selection did not resolve to a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// Some options have no choice yet (names in option order).
    Incomplete(Vec<String>),
    /// The complete selection matches no variant.
    NoMatch,
    /// More than one variant matches: malformed catalog data.
    Ambiguous { matches: usize },
}

/// Outcome of [`VariantResolver::resolve_variant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Resolved(&'a Variant),
    Unresolved(UnresolvedReason),
}

impl<'a> Resolution<'a> {
    pub fn variant(&self) -> Option<&'a Variant> {
        match self {
            Resolution::Resolved(v) => Some(v),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Units of the resolved variant that can be bought; 0 when unresolved.
    pub fn purchasable_quantity(&self) -> u32 {
        self.variant()
            .map(|v| v.stock.purchasable_quantity())
            .unwrap_or(0)
    }
}

/// Option names in `options` that `selection` does not cover, in option order.
pub fn validate_complete(selection: &Selection, options: &[ProductOption]) -> Vec<String> {
    options
        .iter()
        .filter(|opt| !selection.contains(&opt.name))
        .map(|opt| opt.name.clone())
        .collect()
}

/// Read-only view over a product's options and variants.
///
/// Cheap to construct; holds only borrows. All answers are computed by scanning
/// the variant list, which is small (tens of entries). For repeated availability
/// checks over the same product see [`AvailabilityIndex`](crate::AvailabilityIndex).
#[derive(Debug, Clone, Copy)]
pub struct VariantResolver<'a> {
    options: &'a [ProductOption],
    variants: &'a [Variant],
}

impl<'a> VariantResolver<'a> {
    pub fn new(options: &'a [ProductOption], variants: &'a [Variant]) -> Self {
        Self { options, variants }
    }

    pub fn for_product(product: &'a Product) -> Self {
        Self::new(&product.product_options, &product.variants)
    }

    pub fn options(&self) -> &'a [ProductOption] {
        self.options
    }

    pub fn variants(&self) -> &'a [Variant] {
        self.variants
    }

    /// True iff some in-stock variant agrees with `selection ∪ {option: choice}`
    /// on every key of that union.
    ///
    /// Advisory only: the caller decides how to render a disabled choice and
    /// the selection itself is never touched.
    pub fn is_choice_enabled(&self, option: &str, choice: &str, selection: &Selection) -> bool {
        let candidate = selection.with(option, choice);
        self.variants
            .iter()
            .any(|v| v.stock.is_available() && v.agrees_with(candidate.pairs()))
    }

    /// The unique variant whose choice map equals the complete `selection`.
    pub fn resolve_variant(&self, selection: &Selection) -> Resolution<'a> {
        let missing = validate_complete(selection, self.options);
        if !missing.is_empty() {
            return Resolution::Unresolved(UnresolvedReason::Incomplete(missing));
        }

        let mut matches = self
            .variants
            .iter()
            .filter(|v| v.matches_exactly(selection.as_choices()));

        match (matches.next(), matches.count()) {
            (Some(variant), 0) => Resolution::Resolved(variant),
            (None, _) => {
                tracing::debug!(selected = selection.len(), "selection matches no variant");
                Resolution::Unresolved(UnresolvedReason::NoMatch)
            }
            (Some(_), rest) => {
                let matches = rest + 1;
                tracing::warn!(matches, "ambiguous catalog data: selection matches several variants");
                Resolution::Unresolved(UnresolvedReason::Ambiguous { matches })
            }
        }
    }

    /// Option names still lacking a choice.
    pub fn validate_complete(&self, selection: &Selection) -> Vec<String> {
        validate_complete(selection, self.options)
    }
}
