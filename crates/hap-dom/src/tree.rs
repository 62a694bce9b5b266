//! DOM Tree (arena-based allocation)

use crate::{DomError, Node, NodeId, NodeRef};

/// Arena-based DOM tree; nodes are never freed, only detached
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a detached node
    pub fn create_node(&mut self, tag_name: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(tag_name));
        id
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.get_mut(id).ok_or(DomError::UnknownNode(id))
    }

    /// Borrowed handle for style matching
    pub fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.get(id).map(|node| NodeRef::new(self, id, node))
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// previous parent first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.get(parent).is_none() {
            return Err(DomError::UnknownNode(parent));
        }
        if self.get(child).is_none() {
            return Err(DomError::UnknownNode(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(DomError::Cycle { parent, child });
        }

        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        tracing::trace!("Appended {} to {}", child, parent);
        Ok(())
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.get(child).and_then(|c| c.parent) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child)
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Children of a node (empty for unknown ids)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn detach(&mut self, child: NodeId) -> Result<(), DomError> {
        let old_parent = self.node_mut(child)?.parent.take();
        if let Some(old_parent) = old_parent {
            self.node_mut(old_parent)?.children.retain(|&c| c != child);
        }
        Ok(())
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}
