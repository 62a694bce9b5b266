//! Selector model and matching
//!
//! A selector is a closed enum. Combinator operands are boxed selectors,
//! so `.a > div #id` nests as `Descendant(Child(.a, div), #id)`.

use std::fmt;

use crate::{Config, Specificity, StyleableNode};

/// Kind of a conditional selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// `#id`
    Id,
    /// `.class`
    Class,
}

/// Coarse selector shape, as reported to callers that inspect parse results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorType {
    Element,
    Conditional,
    Descendant,
    Child,
}

/// A parsed selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Type selector (`div`, `text`)
    Element { tag: String },
    /// ID or class selector
    Conditional { kind: ConditionKind, value: String },
    /// `ancestor subject`
    Descendant {
        ancestor: Box<Selector>,
        subject: Box<Selector>,
    },
    /// `parent > subject`
    Child {
        parent: Box<Selector>,
        subject: Box<Selector>,
    },
    /// `base:state`, e.g. `div:active`
    State { base: Box<Selector>, state: String },
}

impl Selector {
    pub fn element(tag: impl Into<String>) -> Self {
        Selector::Element { tag: tag.into() }
    }

    pub fn id(value: impl Into<String>) -> Self {
        Selector::Conditional {
            kind: ConditionKind::Id,
            value: value.into(),
        }
    }

    pub fn class(value: impl Into<String>) -> Self {
        Selector::Conditional {
            kind: ConditionKind::Class,
            value: value.into(),
        }
    }

    pub fn descendant(ancestor: Selector, subject: Selector) -> Self {
        Selector::Descendant {
            ancestor: Box::new(ancestor),
            subject: Box::new(subject),
        }
    }

    pub fn child(parent: Selector, subject: Selector) -> Self {
        Selector::Child {
            parent: Box::new(parent),
            subject: Box::new(subject),
        }
    }

    pub fn state(base: Selector, state: impl Into<String>) -> Self {
        Selector::State {
            base: Box::new(base),
            state: state.into(),
        }
    }

    /// Shape of this selector. A state selector reports its base's type.
    pub fn selector_type(&self) -> SelectorType {
        match self {
            Selector::Element { .. } => SelectorType::Element,
            Selector::Conditional { .. } => SelectorType::Conditional,
            Selector::Descendant { .. } => SelectorType::Descendant,
            Selector::Child { .. } => SelectorType::Child,
            Selector::State { base, .. } => base.selector_type(),
        }
    }

    /// Specificity; combinators sum their operands
    pub fn specificity(&self) -> Specificity {
        match self {
            Selector::Element { .. } => Specificity::ELEMENT,
            Selector::Conditional {
                kind: ConditionKind::Id,
                ..
            } => Specificity::ID,
            Selector::Conditional {
                kind: ConditionKind::Class,
                ..
            } => Specificity::CLASS,
            Selector::Descendant { ancestor, subject } => {
                ancestor.specificity() + subject.specificity()
            }
            Selector::Child { parent, subject } => parent.specificity() + subject.specificity(),
            Selector::State { base, .. } => base.specificity(),
        }
    }

    /// Match with default settings (case-sensitive tags)
    pub fn matches<N: StyleableNode>(&self, node: &N) -> bool {
        self.matches_in(node, &Config::default())
    }

    /// Match a node against this selector
    pub fn matches_in<N: StyleableNode>(&self, node: &N, config: &Config) -> bool {
        match self {
            Selector::Element { tag } => {
                if config.case_sensitive_tags {
                    node.tag_name() == tag
                } else {
                    node.tag_name().eq_ignore_ascii_case(tag)
                }
            }
            Selector::Conditional {
                kind: ConditionKind::Id,
                value,
            } => {
                let id = node.id();
                !id.is_empty() && id == value
            }
            Selector::Conditional {
                kind: ConditionKind::Class,
                value,
            } => node.class_list().split_whitespace().any(|c| c == value),
            Selector::Descendant { ancestor, subject } => {
                subject.matches_in(node, config)
                    && node.ancestors().any(|a| ancestor.matches_in(&a, config))
            }
            Selector::Child { parent, subject } => {
                subject.matches_in(node, config)
                    && node
                        .parent()
                        .is_some_and(|p| parent.matches_in(&p, config))
            }
            Selector::State { base, state } => {
                base.matches_in(node, config) && node.has_state(state)
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Element { tag } => write!(f, "{}", tag),
            Selector::Conditional {
                kind: ConditionKind::Id,
                value,
            } => write!(f, "#{}", value),
            Selector::Conditional {
                kind: ConditionKind::Class,
                value,
            } => write!(f, ".{}", value),
            Selector::Descendant { ancestor, subject } => write!(f, "{} {}", ancestor, subject),
            Selector::Child { parent, subject } => write!(f, "{} > {}", parent, subject),
            Selector::State { base, state } => write!(f, "{}:{}", base, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestNode;

    #[test]
    fn test_element_match_is_case_sensitive_by_default() {
        let div = TestNode::new("div");
        assert!(Selector::element("div").matches(&&div));
        assert!(!Selector::element("DIV").matches(&&div));

        let relaxed = Config {
            case_sensitive_tags: false,
            ..Config::default()
        };
        assert!(Selector::element("DIV").matches_in(&&div, &relaxed));
    }

    #[test]
    fn test_class_is_token_membership() {
        let node = TestNode::new("div").with_class("  class-test2   class-test1 ");
        assert!(Selector::class("class-test1").matches(&&node));
        assert!(Selector::class("class-test2").matches(&&node));
        assert!(!Selector::class("class-test").matches(&&node));
    }

    #[test]
    fn test_empty_id_never_matches() {
        let node = TestNode::new("div");
        assert!(!Selector::id("").matches(&&node));
        assert!(!Selector::id("a").matches(&&node));

        let node = TestNode::new("div").with_id("a");
        assert!(Selector::id("a").matches(&&node));
    }

    #[test]
    fn test_descendant_walks_all_ancestors() {
        let page = TestNode::new("div").with_class("doc-page");
        let list = TestNode::new("list").with_parent(&page);
        let text = TestNode::new("text").with_parent(&list);

        assert!(Selector::descendant(Selector::class("doc-page"), Selector::element("text"))
            .matches(&&text));
        assert!(!Selector::descendant(Selector::class("other"), Selector::element("text"))
            .matches(&&text));
        // The node itself is not its own ancestor
        assert!(!Selector::descendant(Selector::element("text"), Selector::element("text"))
            .matches(&&text));
    }

    #[test]
    fn test_child_checks_immediate_parent_only() {
        let page = TestNode::new("div").with_class("doc-page");
        let list = TestNode::new("list").with_parent(&page);
        let text = TestNode::new("text").with_parent(&list);

        let direct = Selector::child(Selector::element("list"), Selector::element("text"));
        let skipped = Selector::child(Selector::class("doc-page"), Selector::element("text"));
        assert!(direct.matches(&&text));
        assert!(!skipped.matches(&&text));
        assert!(!direct.matches(&&page));
    }

    #[test]
    fn test_state_selector() {
        let idle = TestNode::new("input");
        let pressed = TestNode::new("input").with_state("active");
        let selector = Selector::state(Selector::element("input"), "active");

        assert!(!selector.matches(&&idle));
        assert!(selector.matches(&&pressed));
        assert_eq!(selector.selector_type(), SelectorType::Element);
        assert_eq!(selector.specificity(), Specificity::ELEMENT);
    }

    #[test]
    fn test_combinator_specificity() {
        let selector = Selector::descendant(
            Selector::child(Selector::class("a"), Selector::element("div")),
            Selector::id("b"),
        );
        assert_eq!(selector.specificity(), Specificity(1, 1, 1));
        assert_eq!(selector.to_string(), ".a > div #b");
    }
}
