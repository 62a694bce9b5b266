//! Reference-linked nodes for unit tests

use crate::{Declaration, StyleObjectId, StyleableNode};

#[derive(Debug, Default)]
pub(crate) struct TestNode<'a> {
    tag: String,
    id: String,
    class: String,
    parent: Option<&'a TestNode<'a>>,
    scope: Option<StyleObjectId>,
    inline: Option<Declaration>,
    states: Vec<String>,
}

impl<'a> TestNode<'a> {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub(crate) fn with_class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    pub(crate) fn with_parent(mut self, parent: &'a TestNode<'a>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub(crate) fn with_scope(mut self, scope: u32) -> Self {
        self.scope = Some(StyleObjectId(scope));
        self
    }

    pub(crate) fn with_inline(mut self, inline: Declaration) -> Self {
        self.inline = Some(inline);
        self
    }

    pub(crate) fn with_state(mut self, state: &str) -> Self {
        self.states.push(state.to_string());
        self
    }
}

impl<'a, 'b> StyleableNode for &'a TestNode<'b> {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn class_list(&self) -> &str {
        &self.class
    }

    fn parent(&self) -> Option<Self> {
        self.parent
    }

    fn style_object_id(&self) -> Option<StyleObjectId> {
        self.scope
    }

    fn inline_style(&self) -> Option<&Declaration> {
        self.inline.as_ref()
    }

    fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }
}
