//! Styleable node interface
//!
//! The widget tree lives outside this crate. The matcher only reads the
//! few fields below and never mutates a node.

use serde::{Deserialize, Serialize};

use crate::Declaration;

/// Handle of a registered stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObjectId(pub u32);

impl std::fmt::Display for StyleObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tree node the cascade can be computed for.
///
/// Implementors are cheap handles (a reference or an arena index pair), so
/// `parent` returns another handle by value.
pub trait StyleableNode: Sized {
    /// Tag name, e.g. `div` or `text`
    fn tag_name(&self) -> &str;

    /// Current id. Empty means the node has no id.
    fn id(&self) -> &str;

    /// Space-separated class tokens. Empty means no classes.
    fn class_list(&self) -> &str;

    /// Parent node, `None` at the root
    fn parent(&self) -> Option<Self>;

    /// Stylesheet this node is scoped to, if set on the node itself
    fn style_object_id(&self) -> Option<StyleObjectId>;

    /// Inline `style` declaration, applied after all stylesheet rules
    fn inline_style(&self) -> Option<&Declaration> {
        None
    }

    /// Whether an interaction state such as `active` is currently on
    fn has_state(&self, _state: &str) -> bool {
        false
    }

    /// Proper ancestors, nearest first
    fn ancestors(&self) -> Ancestors<Self> {
        Ancestors { next: self.parent() }
    }
}

/// Iterator over the proper ancestors of a node
pub struct Ancestors<N> {
    next: Option<N>,
}

impl<N: StyleableNode> Iterator for Ancestors<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
