use serde::{Deserialize, Serialize};

/// One selectable value of an option (e.g. "Red" for "Color").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown to the shopper and used as the key in variant choice maps.
    pub description: String,
    /// Optional display value, e.g. a swatch color `#ff0000`.
    #[serde(default)]
    pub value: Option<String>,
}

impl Choice {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A named product attribute with its ordered choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ProductOption {
    pub fn new(name: impl Into<String>, choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            name: name.into(),
            choices: choices.into_iter().collect(),
        }
    }

    /// Convenience constructor for options whose choices carry no display value.
    pub fn with_labels<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, labels.into_iter().map(Choice::new))
    }

    pub fn choice(&self, label: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.description == label)
    }

    pub fn has_choice(&self, label: &str) -> bool {
        self.choice(label).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_choice_by_label() {
        let color = ProductOption::new(
            "Color",
            [Choice::new("Red").with_value("#ff0000"), Choice::new("Blue")],
        );
        assert_eq!(color.choice("Red").and_then(|c| c.value.as_deref()), Some("#ff0000"));
        assert!(color.has_choice("Blue"));
        assert!(!color.has_choice("red"));
    }
}
