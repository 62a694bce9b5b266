//! Stylesheet Parser
//!
//! Converts a JSON stylesheet description into our internal representation:
//!
//! ```json
//! {
//!   "@info": { "styleObjectId": 1 },
//!   "#title, .caption": { "color": "#333333" },
//!   ".list > text": { "fontSize": "24px" }
//! }
//! ```
//!
//! Key order is source order. A bad block only drops its own rules.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::selector_parser::parse_single_selector;
use crate::{CssError, Declaration, Rule, StyleObjectId, Stylesheet};

const KEY_KEYFRAMES: &str = "@KEYFRAMES";
const KEY_FONT_FACE: &str = "@FONT-FACE";
const KEY_INFO: &str = "@info";
const KEY_STYLE_OBJECT_ID: &str = "styleObjectId";

/// Stylesheet parser
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a stylesheet from JSON text
    pub fn parse_str(&self, source: &str) -> Result<Stylesheet, CssError> {
        let value: Value = serde_json::from_str(source)?;
        self.parse(&value)
    }

    /// Parse a stylesheet; dropped rules are only logged
    pub fn parse(&self, source: &Value) -> Result<Stylesheet, CssError> {
        self.parse_with_diagnostics(source)
            .map(|(stylesheet, _)| stylesheet)
    }

    /// Parse a stylesheet, also returning the errors of the rules that were
    /// dropped along the way
    pub fn parse_with_diagnostics(
        &self,
        source: &Value,
    ) -> Result<(Stylesheet, Vec<CssError>), CssError> {
        let Value::Object(blocks) = source else {
            return Err(CssError::NotAnObject);
        };

        let mut stylesheet = Stylesheet::new();
        let mut diagnostics = Vec::new();
        let mut order = 0;

        for (key, block) in blocks {
            if key.is_empty() {
                continue;
            }

            if key.starts_with('@') {
                self.parse_at_rule(&mut stylesheet, key, block);
                continue;
            }

            self.parse_rule_block(&mut stylesheet, &mut diagnostics, key, block, order);
            order += 1;
        }

        for error in &diagnostics {
            tracing::warn!("Dropped style rule: {}", error);
        }
        tracing::debug!(
            "Parsed stylesheet: {} rules, {} dropped",
            stylesheet.len(),
            diagnostics.len()
        );

        Ok((stylesheet, diagnostics))
    }

    /// Parse an inline `style` object. `null` is an empty style.
    pub fn parse_inline_style(&self, style: &Value) -> Result<Declaration, CssError> {
        match style {
            Value::Null => Ok(Declaration::new()),
            Value::Object(properties) => Ok(self.convert_declaration(properties)),
            _ => Err(CssError::InvalidInlineStyle),
        }
    }

    fn parse_rule_block(
        &self,
        stylesheet: &mut Stylesheet,
        diagnostics: &mut Vec<CssError>,
        key: &str,
        block: &Value,
        order: usize,
    ) {
        let Value::Object(properties) = block else {
            diagnostics.push(CssError::InvalidDeclaration {
                selector: key.to_string(),
            });
            return;
        };

        let declaration = Arc::new(self.convert_declaration(properties));
        for text in key.split(',') {
            match parse_single_selector(text) {
                Ok(selector) => {
                    stylesheet
                        .rules
                        .push(Rule::new(selector, Arc::clone(&declaration), order));
                }
                Err(source) => diagnostics.push(CssError::InvalidSelector {
                    selector: text.trim().to_string(),
                    source,
                }),
            }
        }
    }

    fn convert_declaration(&self, properties: &Map<String, Value>) -> Declaration {
        properties
            .iter()
            // `_meta` and friends carry compiler bookkeeping, not style
            .filter(|(name, _)| !name.is_empty() && !name.starts_with('_'))
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect()
    }

    fn parse_at_rule(&self, stylesheet: &mut Stylesheet, key: &str, block: &Value) {
        match key {
            KEY_KEYFRAMES => {
                let Some(animations) = block.as_object() else {
                    tracing::warn!("Ignoring {}: not an object", KEY_KEYFRAMES);
                    return;
                };
                for (name, frames) in animations {
                    if frames.is_array() {
                        stylesheet.keyframes.insert(name.clone(), frames.clone());
                    } else {
                        tracing::warn!("Ignoring keyframes `{}`: not an array", name);
                    }
                }
            }
            KEY_FONT_FACE => {
                let Some(fonts) = block.as_object() else {
                    tracing::warn!("Ignoring {}: not an object", KEY_FONT_FACE);
                    return;
                };
                for (name, font) in fonts {
                    stylesheet.font_faces.insert(name.clone(), font.clone());
                }
            }
            KEY_INFO => {
                stylesheet.style_object_id = block
                    .get(KEY_STYLE_OBJECT_ID)
                    .and_then(Value::as_u64)
                    .and_then(|id| u32::try_from(id).ok())
                    .map(StyleObjectId);
            }
            // @MEDIA and anything newer
            _ => tracing::debug!("Skipping unsupported at-rule {}", key),
        }
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Selector;
    use serde_json::json;

    #[test]
    fn test_parse_simple() {
        let stylesheet = CssParser::new()
            .parse_str(r##"{ ".foo": { "display": "flex" }, "#bar": { "color": "red" } }"##)
            .unwrap();
        assert_eq!(stylesheet.len(), 2);
        assert_eq!(stylesheet.rules[0].selector, Selector::class("foo"));
        assert_eq!(stylesheet.rules[1].source_order, 1);
    }

    #[test]
    fn test_source_order_follows_keys() {
        let source = json!({
            "text": { "a": "1" },
            ".b": { "a": "2" },
            "div": { "a": "3" }
        });
        let stylesheet = CssParser::new().parse(&source).unwrap();
        let tags: Vec<String> = stylesheet.rules.iter().map(|r| r.selector.to_string()).collect();
        assert_eq!(tags, ["text", ".b", "div"]);
        let orders: Vec<usize> = stylesheet.rules.iter().map(|r| r.source_order).collect();
        assert_eq!(orders, [0, 1, 2]);
    }

    #[test]
    fn test_grouped_selectors_share_block() {
        let source = json!({ "h1, .title ,#main": { "color": "red" }, "p": { "color": "blue" } });
        let stylesheet = CssParser::new().parse(&source).unwrap();

        assert_eq!(stylesheet.len(), 4);
        assert!(stylesheet.rules[..3].iter().all(|r| r.source_order == 0));
        assert!(Arc::ptr_eq(
            &stylesheet.rules[0].declaration,
            &stylesheet.rules[2].declaration
        ));
        assert_eq!(stylesheet.rules[3].source_order, 1);
    }

    #[test]
    fn test_bad_rules_are_isolated() {
        let source = json!({
            "div >": { "color": "red" },
            "text": "not-an-object",
            "a, b +, c": { "color": "green" },
            "span": { "color": "blue" }
        });
        let (stylesheet, diagnostics) = CssParser::new().parse_with_diagnostics(&source).unwrap();

        let kept: Vec<String> = stylesheet.rules.iter().map(|r| r.selector.to_string()).collect();
        assert_eq!(kept, ["a", "c", "span"]);
        assert_eq!(diagnostics.len(), 3);
        assert!(matches!(diagnostics[1], CssError::InvalidDeclaration { .. }));
    }

    #[test]
    fn test_meta_properties_skipped() {
        let source = json!({ "div": { "_meta": { "ruleDef": [] }, "width": "10px", "flex": 1 } });
        let stylesheet = CssParser::new().parse(&source).unwrap();
        let declaration = &stylesheet.rules[0].declaration;

        assert_eq!(declaration.get_length(), 2);
        assert!(!declaration.contains("_meta"));
        assert_eq!(declaration.get("flex"), Some(&json!(1)));
    }

    #[test]
    fn test_at_rules() {
        let source = json!({
            "@info": { "styleObjectId": 7 },
            "@KEYFRAMES": { "Color": [{ "backgroundColor": "#f76160", "time": 0 }] },
            "@FONT-FACE": { "myfont": { "fontName": "myfont", "src": ["/common/font.ttf"] } },
            "@MEDIA": [{ "condition": "(max-width: 600)", "div": { "a": "b" } }],
            "div": { "a": "c" }
        });
        let stylesheet = CssParser::new().parse(&source).unwrap();

        assert_eq!(stylesheet.style_object_id(), Some(StyleObjectId(7)));
        assert!(stylesheet.keyframes("Color").is_some());
        assert!(stylesheet.font_face("myfont").is_some());
        assert_eq!(stylesheet.len(), 1);
        assert_eq!(stylesheet.rules[0].source_order, 0);
    }

    #[test]
    fn test_not_an_object() {
        let parser = CssParser::new();
        assert!(matches!(parser.parse(&json!([])), Err(CssError::NotAnObject)));
        assert!(matches!(parser.parse_str("{ nope"), Err(CssError::Json(_))));
    }

    #[test]
    fn test_inline_style() {
        let parser = CssParser::new();
        let style = parser
            .parse_inline_style(&json!({ "width": "10px", "_meta": {} }))
            .unwrap();
        assert_eq!(style.get_length(), 1);
        assert!(parser.parse_inline_style(&Value::Null).unwrap().is_empty());
        assert!(matches!(
            parser.parse_inline_style(&json!("width: 10px")),
            Err(CssError::InvalidInlineStyle)
        ));
    }
}
