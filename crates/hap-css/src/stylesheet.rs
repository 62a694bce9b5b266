//! Parsed stylesheets

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::{Declaration, Selector, Specificity, StyleObjectId};

/// One selector bound to a declaration block.
///
/// Grouped selectors (`h1, h2 { .. }`) produce one rule each; they share
/// the declaration and the source order.
#[derive(Debug, Clone)]
pub struct Rule {
    pub selector: Selector,
    pub declaration: Arc<Declaration>,
    /// Position of the block in the source, increasing
    pub source_order: usize,
    pub specificity: Specificity,
}

impl Rule {
    pub fn new(selector: Selector, declaration: Arc<Declaration>, source_order: usize) -> Self {
        let specificity = selector.specificity();
        Self {
            selector,
            declaration,
            source_order,
            specificity,
        }
    }
}

/// Parsed stylesheet
#[derive(Debug, Default)]
pub struct Stylesheet {
    /// Style rules in source order
    pub rules: Vec<Rule>,
    /// `@KEYFRAMES`: animation name -> frames
    pub(crate) keyframes: HashMap<String, Value>,
    /// `@FONT-FACE`: font name -> font description
    pub(crate) font_faces: HashMap<String, Value>,
    /// Handle declared by the sheet's `@info` block
    pub(crate) style_object_id: Option<StyleObjectId>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn keyframes(&self, name: &str) -> Option<&Value> {
        self.keyframes.get(name)
    }

    pub fn font_face(&self, name: &str) -> Option<&Value> {
        self.font_faces.get(name)
    }

    pub fn style_object_id(&self) -> Option<StyleObjectId> {
        self.style_object_id
    }
}
