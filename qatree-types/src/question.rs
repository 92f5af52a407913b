use crate::{ChoiceOption, FormAnswerEntry, FormField, QuestionType};

/// A single question in a questionnaire tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Unique id within a tree.
    id: String,

    /// The question text shown to the user.
    prompt: String,

    /// Optional helper text; empty when absent.
    description: String,

    /// The kind of question (determines answer shape and variant data).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question with an empty description.
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            description: String::new(),
            kind,
        }
    }

    /// Create a free-text question.
    pub fn input(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Input(InputQuestion::new()))
    }

    /// Create a single-choice question with the given options.
    pub fn single(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self::new(id, prompt, QuestionKind::Single(ChoiceQuestion::new(options)))
    }

    /// Create a multiple-choice question with the given options.
    pub fn multi(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self::new(id, prompt, QuestionKind::Multi(ChoiceQuestion::new(options)))
    }

    /// Create a form question with the given fields.
    pub fn form(
        id: impl Into<String>,
        prompt: impl Into<String>,
        fields: Vec<FormField>,
    ) -> Self {
        Self::new(id, prompt, QuestionKind::Form(FormQuestion::new(fields)))
    }

    /// Set the helper description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the helper description (empty when absent).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get a mutable reference to the question kind.
    pub fn kind_mut(&mut self) -> &mut QuestionKind {
        &mut self.kind
    }

    /// The wire tag for this question's kind.
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }
}

/// The kind of question, determining answer shape and variant data.
///
/// The type tag is derived from the variant, never stored next to it, so a
/// tag/variant mismatch cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-text input.
    Input(InputQuestion),

    /// Choose exactly one option.
    Single(ChoiceQuestion),

    /// Choose any number of options.
    Multi(ChoiceQuestion),

    /// A group of named fields answered together.
    Form(FormQuestion),
}

impl QuestionKind {
    /// The wire tag for this kind.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Input(_) => QuestionType::Input,
            Self::Single(_) => QuestionType::Single,
            Self::Multi(_) => QuestionType::Multi,
            Self::Form(_) => QuestionType::Form,
        }
    }

}

/// Variant data for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputQuestion {
    /// The recorded answer, if any.
    pub answer: Option<String>,
}

impl InputQuestion {
    /// Create an unanswered input question.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Variant data shared by single- and multiple-choice questions.
///
/// The answer holds encoded `"id:label"` tokens. Single-choice questions
/// use the same sequence shape and keep at most one entry; sequences longer
/// than one are rejected when the answer is applied, never truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceQuestion {
    /// Options in display order.
    pub options: Vec<ChoiceOption>,

    /// Recorded answer tokens.
    pub answer: Vec<String>,
}

impl ChoiceQuestion {
    /// Create an unanswered choice question with the given options.
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            answer: Vec::new(),
        }
    }
}

/// Variant data for a form question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormQuestion {
    /// Fields in display order.
    pub fields: Vec<FormField>,

    /// Recorded answer, one entry per answered field. `None` until answered.
    pub answer: Option<Vec<FormAnswerEntry>>,
}

impl FormQuestion {
    /// Create an unanswered form question with the given fields.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            answer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_follows_variant() {
        assert_eq!(
            Question::input("q1", "Name?").question_type(),
            QuestionType::Input
        );
        assert_eq!(
            Question::single("q2", "Color?", Vec::new()).question_type(),
            QuestionType::Single
        );
        assert_eq!(
            Question::multi("q3", "Colors?", Vec::new()).question_type(),
            QuestionType::Multi
        );
        assert_eq!(
            Question::form("q4", "Details?", Vec::new()).question_type(),
            QuestionType::Form
        );
    }

    #[test]
    fn description_defaults_to_empty() {
        let question = Question::input("q1", "Name?");
        assert_eq!(question.id(), "q1");
        assert_eq!(question.prompt(), "Name?");
        assert_eq!(question.description(), "");

        let question = question.with_description("Your full name");
        assert_eq!(question.description(), "Your full name");
    }
}
