use crate::{AnswerError, QaTreeNode, TreeError, UnifiedAnswer};

/// A questionnaire tree.
///
/// Owns at most one root node. Nodes are appended under an existing parent
/// and never removed; the flattening serializer reads the tree without
/// mutating it. The tree has no interior locking — the owning caller
/// serializes mutation against traversal, one writer per tree instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaTree {
    root: Option<QaTreeNode>,
}

impl QaTree {
    /// Create a tree with the given root node.
    pub fn new(root: QaTreeNode) -> Self {
        Self { root: Some(root) }
    }

    /// Create an empty tree.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Get the root node, if any.
    pub fn root(&self) -> Option<&QaTreeNode> {
        self.root.as_ref()
    }

    /// Get a mutable reference to the root node, if any.
    pub fn root_mut(&mut self) -> Option<&mut QaTreeNode> {
        self.root.as_mut()
    }

    /// Check whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, QaTreeNode::subtree_len)
    }

    /// Find a node by id.
    pub fn find(&self, id: &str) -> Option<&QaTreeNode> {
        self.root.as_ref().and_then(|root| root.find(id))
    }

    /// Find a node by id, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut QaTreeNode> {
        self.root.as_mut().and_then(|root| root.find_mut(id))
    }

    /// Attach a node under an existing parent, keyed by the given branch key.
    ///
    /// Fails if the tree is empty, the parent id is unknown, or any id in
    /// the attached subtree already exists in the tree (or repeats within
    /// the subtree itself). Checked here, at mutation time, so the
    /// serializer never has to detect structural violations.
    pub fn append(
        &mut self,
        parent_id: &str,
        key: impl Into<String>,
        node: QaTreeNode,
    ) -> Result<(), TreeError> {
        {
            let root = self.root.as_ref().ok_or(TreeError::NoRoot)?;

            let mut incoming = Vec::new();
            collect_ids(&node, &mut incoming);
            for (i, id) in incoming.iter().enumerate() {
                if incoming[..i].contains(id) || root.find(id).is_some() {
                    return Err(TreeError::DuplicateNodeId {
                        node_id: (*id).to_string(),
                    });
                }
            }

            if root.find(parent_id).is_none() {
                return Err(TreeError::UnknownParent {
                    parent_id: parent_id.to_string(),
                });
            }
        }

        let parent = self
            .find_mut(parent_id)
            .ok_or_else(|| TreeError::UnknownParent {
                parent_id: parent_id.to_string(),
            })?;
        parent.add_child(key, node);
        Ok(())
    }

    /// Attach a node under the root, keyed by the node's own id.
    pub fn append_to_root(&mut self, node: QaTreeNode) -> Result<(), TreeError> {
        let root_id = self.root.as_ref().ok_or(TreeError::NoRoot)?.id().to_string();
        let key = node.id().to_string();
        self.append(&root_id, key, node)
    }

    /// Apply a unified answer to the node it addresses.
    ///
    /// Looks the node up by the answer's `nodeId` and stores the canonical
    /// per-kind answer into its question.
    pub fn record_answer(&mut self, answer: &UnifiedAnswer) -> Result<(), AnswerError> {
        let node = self
            .find_mut(answer.node_id())
            .ok_or_else(|| AnswerError::UnknownNode {
                node_id: answer.node_id().to_string(),
            })?;
        answer.apply_to(node.question_mut())
    }
}

fn collect_ids<'a>(node: &'a QaTreeNode, out: &mut Vec<&'a str>) {
    out.push(node.id());
    for child in node.children() {
        collect_ids(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Question;

    fn input_node(id: &str) -> QaTreeNode {
        QaTreeNode::new(id, Question::input(format!("q-{id}"), "?"))
    }

    #[test]
    fn append_under_existing_parent() {
        let mut tree = QaTree::new(input_node("root"));
        tree.append("root", "a", input_node("n1")).unwrap();
        tree.append("n1", "b", input_node("n2")).unwrap();

        assert_eq!(tree.len(), 3);
        assert!(tree.find("n2").is_some());
    }

    #[test]
    fn append_rejects_unknown_parent() {
        let mut tree = QaTree::new(input_node("root"));
        let err = tree.append("missing", "a", input_node("n1")).unwrap_err();
        assert!(matches!(err, TreeError::UnknownParent { .. }));
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let mut tree = QaTree::new(input_node("root"));
        tree.append("root", "a", input_node("n1")).unwrap();

        let err = tree.append("root", "b", input_node("n1")).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateNodeId { .. }));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn append_rejects_duplicate_inside_subtree() {
        let mut tree = QaTree::new(input_node("root"));

        let mut subtree = input_node("n1");
        subtree.add_child("k", input_node("n1"));

        let err = tree.append("root", "a", subtree).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateNodeId { .. }));
    }

    #[test]
    fn empty_tree_rejects_append() {
        let mut tree = QaTree::empty();
        let err = tree.append("root", "a", input_node("n1")).unwrap_err();
        assert!(matches!(err, TreeError::NoRoot));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
