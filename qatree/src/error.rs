use crate::QuestionType;

/// Error type for tree mutation operations.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The tree has no root to attach under.
    #[error("Tree has no root")]
    NoRoot,

    /// The requested parent id does not exist in the tree.
    #[error("No node with id: {parent_id}")]
    UnknownParent { parent_id: String },

    /// The attached subtree contains an id already present in the tree.
    #[error("Duplicate node id: {node_id}")]
    DuplicateNodeId { node_id: String },
}

/// Error type for answer ingestion and application.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// A required request field is blank.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The raw answer payload is JSON null.
    #[error("Answer must not be null")]
    NullAnswer,

    /// The declared question type is not one of the known tags.
    #[error("Unknown question type: {raw}")]
    UnknownQuestionType { raw: String },

    /// The answer addresses a node that is not in the tree.
    #[error("No node with id: {node_id}")]
    UnknownNode { node_id: String },

    /// The declared question type does not match the target question.
    #[error("Question type mismatch: answer is {declared}, question is {actual}")]
    TypeMismatch {
        declared: QuestionType,
        actual: QuestionType,
    },

    /// The answer payload has the wrong shape for the declared type.
    #[error("Answer shape mismatch: expected {expected}")]
    ShapeMismatch { expected: &'static str },

    /// A single-choice answer carried more than one selection.
    #[error("Single-choice answer carried {count} selections")]
    MultipleAnswersForSingle { count: usize },
}
