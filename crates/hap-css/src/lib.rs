//! hap CSS Selector Matching & Style Cascade
//!
//! Parses JSON stylesheet descriptions into ordered rules and computes the
//! cascaded declaration of a node in a live tree. The tree itself is
//! external; it is reached through the [`StyleableNode`] trait.

mod at_rules;
mod cascade;
mod config;
mod declaration;
mod node;
mod parser;
mod registry;
mod selector_parser;
pub mod selectors;
mod stylesheet;
#[cfg(test)]
mod testing;

pub use cascade::StyleResolver;
pub use config::Config;
pub use declaration::Declaration;
pub use node::{Ancestors, StyleObjectId, StyleableNode};
pub use parser::CssParser;
pub use registry::StyleRegistry;
pub use selector_parser::{parse_selector_list, parse_single_selector};
pub use selectors::{ConditionKind, Selector, SelectorType};
pub use stylesheet::{Rule, Stylesheet};

/// Parse a stylesheet from JSON text
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, CssError> {
    CssParser::new().parse_str(source)
}

/// Selector specificity (a, b, c) where:
/// a = ID selectors
/// b = class selectors
/// c = type selectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    pub const ID: Specificity = Specificity(1, 0, 0);
    pub const CLASS: Specificity = Specificity(0, 1, 0);
    pub const ELEMENT: Specificity = Specificity(0, 0, 1);

    pub fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self(ids, classes, types)
    }

    /// Add another specificity to this one
    pub fn add(&mut self, other: Specificity) {
        self.0 += other.0;
        self.1 += other.1;
        self.2 += other.2;
    }

    /// Single weighted score, ids * 10^6 + classes * 10^3 + types.
    ///
    /// Only ordered like the tuple while classes and types stay below 1000.
    pub fn score(&self) -> u64 {
        self.0 as u64 * 1_000_000 + self.1 as u64 * 1_000 + self.2 as u64
    }
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(mut self, other: Specificity) -> Specificity {
        Specificity::add(&mut self, other);
        self
    }
}

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Dangling combinator in selector `{0}`")]
    DanglingCombinator(String),

    #[error("Invalid selector token `{0}`")]
    InvalidToken(String),
}

/// Stylesheet parsing error
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Invalid selector `{selector}`: {source}")]
    InvalidSelector {
        selector: String,
        #[source]
        source: SelectorError,
    },

    #[error("Declaration block for `{selector}` is not an object")]
    InvalidDeclaration { selector: String },

    #[error("Inline style is not an object")]
    InvalidInlineStyle,

    #[error("Stylesheet source is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stylesheet source must be a JSON object")]
    NotAnObject,
}
