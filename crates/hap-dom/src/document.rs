//! Document - High-level document API
//!
//! Owns the node tree together with the stylesheets registered for it, and
//! computes node styles on demand. Callers recompute whenever a node's id,
//! class list or ancestry changes; nothing is cached here.

use hap_css::{
    Config, CssParser, Declaration, StyleObjectId, StyleRegistry, StyleResolver, Stylesheet,
};
use serde_json::Value;

use crate::{DomError, DomTree, NodeId, NodeRef};

/// Component document
#[derive(Debug, Default)]
pub struct Document {
    /// The node tree
    pub tree: DomTree,
    registry: StyleRegistry,
    resolver: StyleResolver,
}

impl Document {
    /// Create an empty document with default style settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            resolver: StyleResolver::with_config(config),
            ..Self::default()
        }
    }

    /// Create a detached node
    pub fn create_node(&mut self, tag_name: &str) -> NodeId {
        self.tree.create_node(tag_name)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.tree.append_child(parent, child)
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.tree.remove_child(parent, child)
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.tree.node_ref(id)
    }

    /// Set the node id; surrounding whitespace is dropped, empty clears it
    pub fn set_css_id(&mut self, id: NodeId, css_id: &str) -> Result<(), DomError> {
        self.tree.node_mut(id)?.css_id = css_id.trim().to_string();
        Ok(())
    }

    /// Set the class attribute, e.g. `" class-a  class-b "`
    pub fn set_css_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        let normalized = class.split_whitespace().collect::<Vec<_>>().join(" ");
        self.tree.node_mut(id)?.css_class = normalized;
        Ok(())
    }

    /// Scope a node to a stylesheet; `None` falls back to its ancestors
    pub fn set_style_object_id(
        &mut self,
        id: NodeId,
        style_object_id: Option<StyleObjectId>,
    ) -> Result<(), DomError> {
        self.tree.node_mut(id)?.style_object_id = style_object_id;
        Ok(())
    }

    /// Turn an interaction state such as `active` on or off
    pub fn set_state(&mut self, id: NodeId, state: &str, on: bool) -> Result<(), DomError> {
        let states = &mut self.tree.node_mut(id)?.states;
        if on {
            states.insert(state.to_string());
        } else {
            states.remove(state);
        }
        Ok(())
    }

    /// Merge properties into the node's inline style
    pub fn update_inline_style(&mut self, id: NodeId, style: &Declaration) -> Result<(), DomError> {
        self.tree.node_mut(id)?.inline_style.set_all(style);
        Ok(())
    }

    /// Merge a JSON inline style object such as `{ "width": "10px" }`
    pub fn update_inline_style_json(&mut self, id: NodeId, style: &Value) -> Result<(), DomError> {
        let style = CssParser::new().parse_inline_style(style)?;
        self.update_inline_style(id, &style)
    }

    /// Register a stylesheet under `handle`, replacing any previous one
    pub fn register_stylesheet(&mut self, handle: StyleObjectId, stylesheet: Stylesheet) {
        self.registry.register(handle, stylesheet);
    }

    /// Parse a JSON stylesheet and register it under `handle`
    pub fn register_stylesheet_json(
        &mut self,
        handle: StyleObjectId,
        source: &str,
    ) -> Result<(), DomError> {
        let stylesheet = CssParser::new().parse_str(source)?;
        self.register_stylesheet(handle, stylesheet);
        Ok(())
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Cascaded style of a node
    pub fn compute_style(&self, id: NodeId) -> Result<Declaration, DomError> {
        let node = self.node(id).ok_or(DomError::UnknownNode(id))?;
        Ok(self.resolver.compute_node_style(&self.registry, &node))
    }
}
