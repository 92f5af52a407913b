use serde::{Deserialize, Serialize};

/// One answered field of a form question.
///
/// This is both the canonical stored shape inside a form question and the
/// typed wire shape of a form answer item: the field's id plus the values
/// entered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAnswerEntry {
    id: String,
    value: Vec<String>,
}

impl FormAnswerEntry {
    /// Create an entry for the given field id and values.
    pub fn new(id: impl Into<String>, value: Vec<String>) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// Get the field id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the entered values.
    pub fn value(&self) -> &[String] {
        &self.value
    }
}
