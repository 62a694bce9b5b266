//! hap DOM - Styleable document tree
//!
//! Arena-backed tree of component nodes. The document owns the stylesheet
//! registry its nodes are styled from and exposes every node to the cascade
//! through [`hap_css::StyleableNode`].

mod document;
mod node;
mod tree;

pub use document::Document;
pub use node::{Node, NodeRef};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree manipulation error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("Cannot append {child} to {parent}: it would become its own ancestor")]
    Cycle { parent: NodeId, child: NodeId },

    #[error(transparent)]
    Css(#[from] hap_css::CssError),
}
