//! Stylesheet registry
//!
//! Owned by whatever represents the document scope and passed explicitly
//! to the resolver. Registration takes `&mut self`, lookups `&self`, so a
//! registry shared across threads is published once and then only read.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{StyleObjectId, Stylesheet};

/// Handle -> stylesheet mapping
#[derive(Debug, Default, Clone)]
pub struct StyleRegistry {
    sheets: HashMap<StyleObjectId, Arc<Stylesheet>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stylesheet under `id`, returning the one it replaces
    pub fn register(
        &mut self,
        id: StyleObjectId,
        stylesheet: Stylesheet,
    ) -> Option<Arc<Stylesheet>> {
        tracing::debug!("Registering stylesheet {} ({} rules)", id, stylesheet.len());
        self.sheets.insert(id, Arc::new(stylesheet))
    }

    /// Register a stylesheet under the id its `@info` block declares.
    ///
    /// Returns `None`, registering nothing, when the sheet declares no id.
    pub fn register_declared(&mut self, stylesheet: Stylesheet) -> Option<StyleObjectId> {
        let Some(id) = stylesheet.style_object_id() else {
            tracing::warn!("Stylesheet declares no styleObjectId, not registered");
            return None;
        };
        self.register(id, stylesheet);
        Some(id)
    }

    pub fn unregister(&mut self, id: StyleObjectId) -> Option<Arc<Stylesheet>> {
        self.sheets.remove(&id)
    }

    pub fn get(&self, id: StyleObjectId) -> Option<&Arc<Stylesheet>> {
        self.sheets.get(&id)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
