//! DOM Node
//!
//! A component node carries the state the cascade reads: tag, id, class
//! list, stylesheet scope, inline style and interaction states.

use std::collections::HashSet;

use hap_css::{Declaration, StyleObjectId, StyleableNode};

use crate::{DomTree, NodeId};

/// Component node
#[derive(Debug, Default)]
pub struct Node {
    /// Parent node (None if detached or root)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    pub(crate) tag_name: String,
    pub(crate) css_id: String,
    /// Class tokens joined by single spaces
    pub(crate) css_class: String,
    pub(crate) style_object_id: Option<StyleObjectId>,
    pub(crate) inline_style: Declaration,
    pub(crate) states: HashSet<String>,
}

impl Node {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            ..Self::default()
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn css_id(&self) -> &str {
        &self.css_id
    }

    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    pub fn inline_style(&self) -> &Declaration {
        &self.inline_style
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }
}

/// Borrowed handle to a node, used to walk the tree during matching
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a DomTree,
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a DomTree, id: NodeId, node: &'a Node) -> Self {
        Self { tree, id, node }
    }

    pub fn node_id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }
}

impl StyleableNode for NodeRef<'_> {
    fn tag_name(&self) -> &str {
        &self.node.tag_name
    }

    fn id(&self) -> &str {
        &self.node.css_id
    }

    fn class_list(&self) -> &str {
        &self.node.css_class
    }

    fn parent(&self) -> Option<Self> {
        self.node.parent.and_then(|parent| self.tree.node_ref(parent))
    }

    fn style_object_id(&self) -> Option<StyleObjectId> {
        self.node.style_object_id
    }

    fn inline_style(&self) -> Option<&Declaration> {
        if self.node.inline_style.is_empty() {
            None
        } else {
            Some(&self.node.inline_style)
        }
    }

    fn has_state(&self, state: &str) -> bool {
        self.node.has_state(state)
    }
}
