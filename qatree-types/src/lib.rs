//! Core types for the qatree crate.
//!
//! This crate provides the foundational, presentation-agnostic types for
//! questionnaire trees:
//! - `Question` and `QuestionKind` - the polymorphic question family
//! - `ChoiceOption` and `FormField` - selectable options and form fields
//! - `FormAnswerEntry` - one answered form field
//! - `AnswerToken` - the `"id:content"` answer token codec
//! - `QuestionType` - the wire tag for question kinds

mod answer_token;
pub use answer_token::{AnswerToken, resolve_label};

mod choice_option;
pub use choice_option::ChoiceOption;

mod form_answer;
pub use form_answer::FormAnswerEntry;

mod form_field;
pub use form_field::FormField;

mod question;
pub use question::{ChoiceQuestion, FormQuestion, InputQuestion, Question, QuestionKind};

mod question_type;
pub use question_type::QuestionType;
