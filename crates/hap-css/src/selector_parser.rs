//! Selector text parsing
//!
//! `>` separates child steps, runs of whitespace separate descendant steps.
//! Both fold left to right, so the rightmost simple selector is the subject.

use crate::{Selector, SelectorError};

/// Parse a single selector such as `.a > div  #b`.
///
/// A combinator with nothing on one side (`div >`, `> div`, `a >> b`) is
/// rejected with [`SelectorError::DanglingCombinator`].
pub fn parse_single_selector(text: &str) -> Result<Selector, SelectorError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SelectorError::Empty);
    }

    let mut result: Option<Selector> = None;
    for segment in text.split('>') {
        let mut tokens = segment.split_whitespace();
        let Some(first) = tokens.next() else {
            return Err(SelectorError::DanglingCombinator(text.to_string()));
        };

        let first = parse_simple_selector(first)?;
        let mut current = match result.take() {
            Some(parent) => Selector::child(parent, first),
            None => first,
        };
        for token in tokens {
            current = Selector::descendant(current, parse_simple_selector(token)?);
        }
        result = Some(current);
    }

    result.ok_or(SelectorError::Empty)
}

/// Parse a comma-separated selector group, failing on the first bad entry
pub fn parse_selector_list(text: &str) -> Result<Vec<Selector>, SelectorError> {
    text.split(',').map(parse_single_selector).collect()
}

/// Parse one whitespace-free token: `div`, `#id`, `.class`, optionally
/// followed by `:state`
fn parse_simple_selector(token: &str) -> Result<Selector, SelectorError> {
    let (simple, state) = match token.split_once(':') {
        Some((simple, state)) => (simple, Some(state)),
        None => (token, None),
    };

    let base = if let Some(id) = simple.strip_prefix('#') {
        check_name(id, token)?;
        Selector::id(id)
    } else if let Some(class) = simple.strip_prefix('.') {
        check_name(class, token)?;
        Selector::class(class)
    } else {
        check_name(simple, token)?;
        Selector::element(simple)
    };

    match state {
        Some(state) => {
            check_name(state, token)?;
            Ok(Selector::state(base, state))
        }
        None => Ok(base),
    }
}

fn check_name(name: &str, token: &str) -> Result<(), SelectorError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SelectorError::InvalidToken(token.to_string()))
    }
}
