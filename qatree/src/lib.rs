//! # qatree
//!
//! An interactive questionnaire modeled as a tree of question/answer nodes.
//!
//! Three pieces fit together:
//! - [`QaTree`] and [`QaTreeNode`] — the tree itself. Each node owns one
//!   [`Question`]; children are keyed by the branch that produced them and
//!   iterated in insertion order.
//! - [`serialize`] — flattens the tree into parent-referenced
//!   [`FlatRecord`]s in pre-order, so a client can rebuild the tree
//!   incrementally as records stream in.
//! - [`UnifiedAnswer`] — accepts a raw answer payload of unknown shape,
//!   normalizes it per question type, and applies the canonical form to a
//!   question in the tree.
//!
//! ## Example
//!
//! ```
//! use qatree::{ChoiceOption, QaTree, QaTreeNode, Question, serialize};
//!
//! let root = QaTreeNode::new(
//!     "n1",
//!     Question::single(
//!         "q1",
//!         "Favorite color?",
//!         vec![ChoiceOption::new("a", "Red"), ChoiceOption::new("b", "Blue")],
//!     ),
//! );
//! let mut tree = QaTree::new(root);
//! tree.append_to_root(QaTreeNode::new("n2", Question::input("q2", "Why?")))?;
//!
//! let records = serialize(&tree);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].parent_id, None);
//! assert_eq!(records[1].parent_id.as_deref(), Some("n1"));
//! # Ok::<(), qatree::TreeError>(())
//! ```
//!
//! The library is a pure data transformation core: HTTP routing, session
//! storage, and persistence are callers, not residents.

// Re-export all types from qatree-types
pub use qatree_types::*;

mod error;
pub use error::{AnswerError, TreeError};

mod node;
pub use node::QaTreeNode;

mod tree;
pub use tree::QaTree;

mod serialize;
pub use serialize::{FlatRecord, QuestionData, serialize, serialize_json};

mod unified_answer;
pub use unified_answer::UnifiedAnswer;
