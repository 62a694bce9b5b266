//! Style Cascade & Resolver
//!
//! Computes the final declaration for a node by:
//! 1. Matching every rule of the node's stylesheet against it
//! 2. Sorting matches by specificity, then source order
//! 3. Merging property by property, later rules overwriting earlier ones
//! 4. Applying the inline style on top

use crate::at_rules::resolve_extras;
use crate::{Config, Declaration, Rule, StyleObjectId, StyleRegistry, StyleableNode, Stylesheet};

/// Style resolver - computes cascaded declarations for tree nodes
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    config: Config,
}

impl StyleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rules of `stylesheet` matching `node`, in application order
    pub fn matched_rules<'s, N: StyleableNode>(
        &self,
        stylesheet: &'s Stylesheet,
        node: &N,
    ) -> Vec<&'s Rule> {
        let mut matches: Vec<&Rule> = stylesheet
            .rules
            .iter()
            .filter(|rule| rule.selector.matches_in(node, &self.config))
            .collect();

        // Stable sort: equal keys keep their rule order
        matches.sort_by(|a, b| {
            a.specificity
                .cmp(&b.specificity)
                .then(a.source_order.cmp(&b.source_order))
        });
        matches
    }

    /// Compute the declaration of `node` against the stylesheet registered
    /// under `id`.
    ///
    /// An unknown `id` is an unstyled node: only its inline style applies.
    /// Every call builds a fresh declaration; rules and node are only read.
    pub fn compute_style<N: StyleableNode>(
        &self,
        registry: &StyleRegistry,
        node: &N,
        id: StyleObjectId,
    ) -> Declaration {
        let stylesheet = registry.get(id);
        if stylesheet.is_none() {
            tracing::trace!("No stylesheet registered for {}", id);
        }
        self.cascade(stylesheet.map(|s| s.as_ref()), node)
    }

    /// Compute the declaration of `node` against the stylesheet it is
    /// scoped to, see [`StyleResolver::style_scope`]
    pub fn compute_node_style<N: StyleableNode>(
        &self,
        registry: &StyleRegistry,
        node: &N,
    ) -> Declaration {
        match self.style_scope(node) {
            Some(id) => self.compute_style(registry, node, id),
            None => self.cascade(None, node),
        }
    }

    /// Stylesheet handle for `node`: its own, or with
    /// [`Config::inherit_style_scope`] the nearest ancestor's
    pub fn style_scope<N: StyleableNode>(&self, node: &N) -> Option<StyleObjectId> {
        node.style_object_id().or_else(|| {
            if self.config.inherit_style_scope {
                node.ancestors().find_map(|a| a.style_object_id())
            } else {
                None
            }
        })
    }

    fn cascade<N: StyleableNode>(&self, stylesheet: Option<&Stylesheet>, node: &N) -> Declaration {
        let mut style = Declaration::new();

        let mut matched = 0;
        if let Some(stylesheet) = stylesheet {
            for rule in self.matched_rules(stylesheet, node) {
                style.set_all(&rule.declaration);
                matched += 1;
            }
        }

        if let Some(inline) = node.inline_style() {
            style.set_all(inline);
        }

        if let Some(stylesheet) = stylesheet.filter(|_| self.config.resolve_at_rules) {
            resolve_extras(stylesheet, &mut style);
        }

        tracing::trace!(
            "Computed style for <{}>: {} rules matched, {} properties",
            node.tag_name(),
            matched,
            style.get_length()
        );
        style
    }
}
