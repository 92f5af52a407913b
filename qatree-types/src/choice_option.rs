use serde::{Deserialize, Serialize};

/// A selectable option in a single- or multiple-choice question.
///
/// The `id` is the wire key carried inside answer tokens; the `label` is
/// the text shown to the user. Options are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    id: String,
    label: String,
}

impl ChoiceOption {
    /// Create a new option.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Get the option id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}
