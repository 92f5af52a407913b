use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{AnswerError, AnswerToken, FormAnswerEntry, Question, QuestionKind, QuestionType};

/// A raw answer payload as received from a client.
///
/// The `answer` field arrives in one of several shapes depending on the
/// declared question type: a scalar string (input, or a single-choice
/// token), a list of token strings (multi), or a list of `{id, value}`
/// entries (form). The accessors below normalize it defensively — wrong
/// shapes yield absent/empty values, never a panic — and
/// [`apply_to`](Self::apply_to) converts it into the canonical stored
/// answer. The opaque form never travels past that point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedAnswer {
    session_id: String,

    /// The addressed tree node; empty for the first answer of a session.
    #[serde(default)]
    node_id: String,

    /// Declared question type tag: single, multi, input, or form.
    question_type: String,

    /// Raw answer data, shape determined by `question_type`.
    answer: Value,

    /// Extra context passed through by the caller.
    #[serde(default)]
    context: Option<HashMap<String, Value>>,

    user_id: String,
}

impl UnifiedAnswer {
    /// Create an answer payload. Wire payloads deserialize directly; this
    /// is for callers (and tests) that build payloads programmatically.
    pub fn new(
        session_id: impl Into<String>,
        node_id: impl Into<String>,
        question_type: impl Into<String>,
        answer: impl Into<Value>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            node_id: node_id.into(),
            question_type: question_type.into(),
            answer: answer.into(),
            context: None,
            user_id: user_id.into(),
        }
    }

    /// Attach caller context.
    pub fn with_context(mut self, context: HashMap<String, Value>) -> Self {
        self.context = Some(context);
        self
    }

    /// Get the session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get the addressed node id (may be empty).
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Get the user id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Get the declared question type tag as received.
    pub fn raw_question_type(&self) -> &str {
        &self.question_type
    }

    /// Get the raw answer payload.
    pub fn answer(&self) -> &Value {
        &self.answer
    }

    /// Get the caller context, if any.
    pub fn context(&self) -> Option<&HashMap<String, Value>> {
        self.context.as_ref()
    }

    /// The declared question type, parsed case-insensitively.
    pub fn question_type(&self) -> Option<QuestionType> {
        QuestionType::parse(&self.question_type)
    }

    /// Check the request invariants: `sessionId`, `questionType` and
    /// `userId` non-blank, `answer` not null.
    pub fn validate(&self) -> Result<(), AnswerError> {
        if self.session_id.trim().is_empty() {
            return Err(AnswerError::MissingField { field: "sessionId" });
        }
        if self.question_type.trim().is_empty() {
            return Err(AnswerError::MissingField {
                field: "questionType",
            });
        }
        if self.user_id.trim().is_empty() {
            return Err(AnswerError::MissingField { field: "userId" });
        }
        if self.answer.is_null() {
            return Err(AnswerError::NullAnswer);
        }
        Ok(())
    }

    // === Shape accessors ===

    /// The answer as a list of choice tokens.
    ///
    /// `None` unless the payload is an array; non-string elements are
    /// skipped.
    pub fn choice_answer(&self) -> Option<Vec<String>> {
        let items = self.answer.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// The answer as a scalar string. `None` unless the payload is a string.
    pub fn input_answer(&self) -> Option<&str> {
        self.answer.as_str()
    }

    /// The answer as form entries.
    ///
    /// `None` unless the payload is an array. Already-typed entries and
    /// generic JSON maps with `"id"`/`"value"` keys normalize identically;
    /// elements without a string `id` are skipped, and a missing or
    /// malformed `value` normalizes to an empty list.
    pub fn form_answer(&self) -> Option<Vec<FormAnswerEntry>> {
        let items = self.answer.as_array()?;
        Some(items.iter().filter_map(parse_form_entry).collect())
    }

    /// A single display string for this answer, dispatched on the declared
    /// question type. Unknown or missing types render as the empty string.
    pub fn answer_string(&self) -> String {
        match self.question_type() {
            // Single answers arrive as one scalar "id:label" token and pass
            // through unchanged, same as plain input.
            Some(QuestionType::Input | QuestionType::Single) => {
                self.input_answer().unwrap_or_default().to_string()
            }
            Some(QuestionType::Multi) => match self.choice_answer() {
                Some(choices) if !choices.is_empty() => choices.join(", "),
                _ => String::new(),
            },
            Some(QuestionType::Form) => match self.form_answer() {
                Some(entries) => entries
                    .iter()
                    .filter(|entry| !entry.value().is_empty())
                    .map(|entry| format!("{}: {}", entry.id(), entry.value().join(", ")))
                    .collect::<Vec<_>>()
                    .join("; "),
                None => String::new(),
            },
            None => String::new(),
        }
    }

    /// A human-readable rendering of this answer.
    ///
    /// Unlike [`answer_string`](Self::answer_string), choice answers carry
    /// a `"Selected: "` prefix, and every form segment ends with `"; "`,
    /// the last one included.
    pub fn to_readable_text(&self) -> String {
        match self.question_type() {
            Some(QuestionType::Single) => self
                .input_answer()
                .map(|choice| format!("Selected: {choice}"))
                .unwrap_or_default(),
            Some(QuestionType::Multi) => match self.choice_answer() {
                Some(choices) if !choices.is_empty() => {
                    format!("Selected: {}", choices.join(", "))
                }
                _ => String::new(),
            },
            Some(QuestionType::Input) => self.input_answer().unwrap_or_default().to_string(),
            Some(QuestionType::Form) => match self.form_answer() {
                Some(entries) => entries
                    .iter()
                    .map(|entry| format!("{}: {}; ", entry.id(), entry.value().join(", ")))
                    .collect(),
                None => String::new(),
            },
            None => String::new(),
        }
    }

    /// Option ids decoded from the choice tokens.
    ///
    /// Tokens without a separator are skipped, not reported. Only single
    /// and multi answers carry tokens; other types yield an empty list.
    pub fn choice_ids(&self) -> Vec<String> {
        self.decoded_choices()
            .iter()
            .map(|token| token.id().to_string())
            .collect()
    }

    /// Option display contents decoded from the choice tokens.
    ///
    /// Same skipping rules as [`choice_ids`](Self::choice_ids).
    pub fn choice_contents(&self) -> Vec<String> {
        self.decoded_choices()
            .iter()
            .map(|token| token.content().to_string())
            .collect()
    }

    fn decoded_choices(&self) -> Vec<AnswerToken> {
        match self.question_type() {
            Some(QuestionType::Single) => self
                .input_answer()
                .and_then(AnswerToken::decode)
                .into_iter()
                .collect(),
            Some(QuestionType::Multi) => self
                .choice_answer()
                .unwrap_or_default()
                .iter()
                .filter_map(|choice| AnswerToken::decode(choice))
                .collect(),
            _ => Vec::new(),
        }
    }

    // === Application ===

    /// Convert the raw payload into the canonical stored answer for the
    /// given question and record it.
    ///
    /// The declared type must match the question's kind. A single-choice
    /// answer longer than one element is rejected, never truncated.
    pub fn apply_to(&self, question: &mut Question) -> Result<(), AnswerError> {
        let declared =
            self.question_type()
                .ok_or_else(|| AnswerError::UnknownQuestionType {
                    raw: self.question_type.clone(),
                })?;
        let actual = question.question_type();
        if declared != actual {
            return Err(AnswerError::TypeMismatch { declared, actual });
        }

        match question.kind_mut() {
            QuestionKind::Input(input) => {
                let text = self.input_answer().ok_or(AnswerError::ShapeMismatch {
                    expected: "a string",
                })?;
                input.answer = Some(text.to_string());
            }
            QuestionKind::Single(choice) => {
                // The wire sends one scalar token; a one-element list is
                // tolerated since the stored shape is a sequence anyway.
                let tokens = match self.input_answer() {
                    Some(token) => vec![token.to_string()],
                    None => self.choice_answer().ok_or(AnswerError::ShapeMismatch {
                        expected: "a string or a one-element list",
                    })?,
                };
                if tokens.len() > 1 {
                    return Err(AnswerError::MultipleAnswersForSingle {
                        count: tokens.len(),
                    });
                }
                choice.answer = tokens;
            }
            QuestionKind::Multi(choice) => {
                choice.answer = self.choice_answer().ok_or(AnswerError::ShapeMismatch {
                    expected: "a list of strings",
                })?;
            }
            QuestionKind::Form(form) => {
                form.answer = Some(self.form_answer().ok_or(AnswerError::ShapeMismatch {
                    expected: "a list of {id, value} entries",
                })?);
            }
        }
        Ok(())
    }
}

fn parse_form_entry(item: &Value) -> Option<FormAnswerEntry> {
    let id = item.get("id")?.as_str()?;
    let values = item
        .get("value")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    Some(FormAnswerEntry::new(id, values))
}
