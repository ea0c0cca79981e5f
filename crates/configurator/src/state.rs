//! Caller-owned configurator session state.

use serde::{Deserialize, Serialize};

use crate::engine::{VariantResolver, validate_complete};
use crate::selection::Selection;
use courtside_catalog::ProductOption;

/// Selection plus the "required" flags raised by the last validation.
///
/// Created empty when a configurable product is displayed and dropped when the
/// shopper navigates away or completes an add-to-cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguratorState {
    selection: Selection,
    missing: Vec<String>,
}

impl ConfiguratorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Options flagged as required by the last [`validate`](Self::validate).
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn is_missing(&self, option: &str) -> bool {
        self.missing.iter().any(|m| m == option)
    }

    /// Set `option` to `choice` and clear the missing flag for that option only.
    ///
    /// No validation against the product: an unknown choice simply never
    /// resolves to a variant.
    pub fn select_choice(mut self, option: &str, choice: &str) -> Self {
        self.selection = self.selection.select(option, choice);
        self.missing.retain(|m| m != option);
        self
    }

    pub fn clear_choice(mut self, option: &str) -> Self {
        self.selection = self.selection.clear(option);
        self
    }

    /// Raise missing flags for every option without a choice.
    pub fn validate(mut self, options: &[ProductOption]) -> Self {
        self.missing = validate_complete(&self.selection, options);
        self
    }

    pub fn is_complete(&self, options: &[ProductOption]) -> bool {
        validate_complete(&self.selection, options).is_empty()
    }
}

/// One choice as presentation should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub label: String,
    pub value: Option<String>,
    pub selected: bool,
    pub enabled: bool,
}

/// One option with its choices and required marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub name: String,
    pub selected: Option<String>,
    pub required: bool,
    pub choices: Vec<ChoiceView>,
}

/// Render-ready view of every option for the current state.
pub fn option_views(resolver: &VariantResolver<'_>, state: &ConfiguratorState) -> Vec<OptionView> {
    let selection = state.selection();
    resolver
        .options()
        .iter()
        .map(|opt| OptionView {
            name: opt.name.clone(),
            selected: selection.get(&opt.name).map(str::to_string),
            required: state.is_missing(&opt.name),
            choices: opt
                .choices
                .iter()
                .map(|c| ChoiceView {
                    label: c.description.clone(),
                    value: c.value.clone(),
                    selected: selection.is_selected(&opt.name, &c.description),
                    enabled: resolver.is_choice_enabled(&opt.name, &c.description, selection),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::racket_shirt;

    #[test]
    fn selecting_clears_only_that_missing_flag() {
        let (options, _) = racket_shirt();
        let state = ConfiguratorState::new().validate(&options);
        assert!(state.is_missing("Color"));
        assert!(state.is_missing("Size"));

        let state = state.select_choice("Color", "Red");
        assert!(!state.is_missing("Color"));
        assert!(state.is_missing("Size"));
    }

    #[test]
    fn invalidated_earlier_choice_is_kept() {
        let (options, variants) = racket_shirt();
        let resolver = VariantResolver::new(&options, &variants);

        let state = ConfiguratorState::new()
            .select_choice("Size", "M")
            .select_choice("Color", "Blue");

        // Blue/M does not exist, but the engine never drops the earlier choice.
        assert_eq!(state.selection().get("Size"), Some("M"));
        assert!(!resolver.is_choice_enabled("Size", "M", state.selection()));
    }

    #[test]
    fn option_views_mark_selected_disabled_and_required() {
        let (options, variants) = racket_shirt();
        let resolver = VariantResolver::new(&options, &variants);
        let state = ConfiguratorState::new()
            .validate(&options)
            .select_choice("Color", "Red");

        let views = option_views(&resolver, &state);
        assert_eq!(views.len(), 2);

        let color = &views[0];
        assert_eq!(color.selected.as_deref(), Some("Red"));
        assert!(!color.required);
        assert!(color.choices[0].selected);

        let size = &views[1];
        assert!(size.required);
        assert_eq!(size.selected, None);
        assert!(!size.choices[0].enabled, "Red/S is sold out");
        assert!(size.choices[1].enabled);
    }

    #[test]
    fn clear_choice_removes_selection() {
        let state = ConfiguratorState::new()
            .select_choice("Color", "Red")
            .clear_choice("Color");
        assert!(state.selection().is_empty());
    }
}
