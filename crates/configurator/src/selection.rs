use serde::{Deserialize, Serialize};

use courtside_catalog::VariantChoices;
use courtside_core::ValueObject;

/// The shopper's in-progress choice per option; possibly partial.
///
/// A plain value: every mutation returns a new `Selection`, so callers own the
/// session state and can keep or discard earlier versions freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(VariantChoices);

impl ValueObject for Selection {}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `option` to `choice`, replacing any earlier choice for it.
    pub fn select(mut self, option: impl Into<String>, choice: impl Into<String>) -> Self {
        self.0.insert(option.into(), choice.into());
        self
    }

    /// Remove the choice for `option`, if any.
    pub fn clear(mut self, option: &str) -> Self {
        self.0.remove(option);
        self
    }

    pub fn get(&self, option: &str) -> Option<&str> {
        self.0.get(option).map(String::as_str)
    }

    pub fn contains(&self, option: &str) -> bool {
        self.0.contains_key(option)
    }

    pub fn is_selected(&self, option: &str, choice: &str) -> bool {
        self.get(option) == Some(choice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(option, choice)` pairs in option-name order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_choices(&self) -> &VariantChoices {
        &self.0
    }

    /// This selection with `option` hypothetically set to `choice`.
    pub fn with(&self, option: &str, choice: &str) -> Self {
        self.clone().select(option, choice)
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_replaces_previous_choice() {
        let sel = Selection::new().select("Color", "Red").select("Color", "Blue");
        assert_eq!(sel.get("Color"), Some("Blue"));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn clear_removes_key() {
        let sel = Selection::new()
            .select("Color", "Red")
            .select("Size", "M")
            .clear("Color");
        assert!(!sel.contains("Color"));
        assert!(sel.is_selected("Size", "M"));
    }

    #[test]
    fn with_does_not_modify_original() {
        let sel = Selection::new().select("Color", "Red");
        let hypothetical = sel.with("Size", "S");
        assert_eq!(sel.len(), 1);
        assert_eq!(hypothetical.len(), 2);
    }
}
