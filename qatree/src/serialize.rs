use serde::Serialize;

use crate::{
    AnswerToken, ChoiceOption, ChoiceQuestion, FormField, QaTree, QaTreeNode, Question,
    QuestionKind, resolve_label,
};

/// One flattened node record.
///
/// Records are emitted parent-before-child so a client can rebuild the tree
/// incrementally as they stream in; `parent_id` carries the linkage and is
/// omitted for the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    pub node_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    pub question_data: QuestionData,

    /// The stored answer formatted as a flat display string.
    pub answer: String,
}

/// The per-type projection of a question carried in a [`FlatRecord`].
///
/// Each variant carries exactly the fields its type declares; the
/// collections are always present, possibly empty, never null, so
/// consumers need no null checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionData {
    Input {
        question: String,
        desc: String,
    },
    Single {
        question: String,
        desc: String,
        options: Vec<ChoiceOption>,
    },
    Multi {
        question: String,
        desc: String,
        options: Vec<ChoiceOption>,
    },
    Form {
        question: String,
        desc: String,
        fields: Vec<FormField>,
    },
}

/// Flatten a tree into parent-referenced records.
///
/// Pre-order traversal: a parent's record always precedes its descendants',
/// and children keep their insertion order. An empty tree yields an empty
/// sequence. Exactly one record is emitted per node, and serializing the
/// same unmutated tree twice yields identical output.
pub fn serialize(tree: &QaTree) -> Vec<FlatRecord> {
    let mut records = Vec::new();
    if let Some(root) = tree.root() {
        visit(root, None, &mut records);
    }
    records
}

/// Serialize a tree to its JSON wire form.
///
/// An empty tree serializes to `"[]"`, never null.
pub fn serialize_json(tree: &QaTree) -> serde_json::Result<String> {
    serde_json::to_string(&serialize(tree))
}

fn visit(node: &QaTreeNode, parent_id: Option<&str>, records: &mut Vec<FlatRecord>) {
    records.push(flat_record(node, parent_id));
    for child in node.children() {
        visit(child, Some(node.id()), records);
    }
}

fn flat_record(node: &QaTreeNode, parent_id: Option<&str>) -> FlatRecord {
    let question = node.question();
    FlatRecord {
        node_id: node.id().to_string(),
        parent_id: parent_id.map(str::to_string),
        question_data: question_data(question),
        answer: format_answer(question),
    }
}

fn question_data(question: &Question) -> QuestionData {
    let prompt = question.prompt().to_string();
    let desc = question.description().to_string();
    match question.kind() {
        QuestionKind::Input(_) => QuestionData::Input {
            question: prompt,
            desc,
        },
        QuestionKind::Single(choice) => QuestionData::Single {
            question: prompt,
            desc,
            options: choice.options.clone(),
        },
        QuestionKind::Multi(choice) => QuestionData::Multi {
            question: prompt,
            desc,
            options: choice.options.clone(),
        },
        QuestionKind::Form(form) => QuestionData::Form {
            question: prompt,
            desc,
            fields: form.fields.clone(),
        },
    }
}

fn format_answer(question: &Question) -> String {
    match question.kind() {
        QuestionKind::Input(input) => input.answer.clone().unwrap_or_default(),
        QuestionKind::Single(choice) | QuestionKind::Multi(choice) => format_choice_answer(choice),
        QuestionKind::Form(form) => match &form.answer {
            // Structured re-encoding, not prose: this path feeds consumers
            // that rebuild the full answer.
            Some(entries) => serde_json::to_string(entries).unwrap_or_default(),
            None => String::new(),
        },
    }
}

/// Resolve each stored token against the current option list.
///
/// The label is looked up by the decoded id rather than taken from the
/// token, so an option renamed after the answer was recorded displays its
/// current label. Stored entries without a separator are treated as bare
/// ids; entries that match no option fall back to the raw stored string.
fn format_choice_answer(choice: &ChoiceQuestion) -> String {
    let labels: Vec<&str> = choice
        .answer
        .iter()
        .map(|stored| {
            let decoded = AnswerToken::decode(stored);
            let id = decoded.as_ref().map_or(stored.as_str(), AnswerToken::id);
            resolve_label(&choice.options, id).unwrap_or(stored)
        })
        .collect();
    labels.join(",")
}
