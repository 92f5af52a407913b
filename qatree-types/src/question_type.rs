use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of question type tags.
///
/// This is the discriminant carried on the wire; the concrete variant data
/// lives in [`QuestionKind`](crate::QuestionKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Free-text input.
    Input,
    /// Choose exactly one option.
    Single,
    /// Choose any number of options.
    Multi,
    /// A group of named fields answered together.
    Form,
}

impl QuestionType {
    /// Parse a wire tag, case-insensitively. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "input" => Some(Self::Input),
            "single" => Some(Self::Single),
            "multi" => Some(Self::Multi),
            "form" => Some(Self::Form),
            _ => None,
        }
    }

    /// The lowercase wire form of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Form => "form",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(QuestionType::parse("Single"), Some(QuestionType::Single));
        assert_eq!(QuestionType::parse("MULTI"), Some(QuestionType::Multi));
        assert_eq!(QuestionType::parse("input"), Some(QuestionType::Input));
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(QuestionType::parse("text"), None);
        assert_eq!(QuestionType::parse(""), None);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(QuestionType::Form.to_string(), "form");
    }
}
