//! Properties derived from `@KEYFRAMES` and `@FONT-FACE`
//!
//! The rendering layer wants the full keyframe list and font sources, not
//! just the names a rule mentions, so the computed declaration carries both.

use serde_json::{Map, Value};

use crate::{Declaration, Stylesheet};

const ANIMATION_NAME: &str = "animationName";
const ANIMATION_KEYFRAMES: &str = "animationKeyframes";
const PAGE_ANIMATION_NAME: &str = "pageAnimationName";
const PAGE_ANIMATION_KEYFRAMES: &str = "pageAnimationKeyframes";
const FONT_FAMILY: &str = "fontFamily";
const FONT_FAMILY_DESC: &str = "fontFamilyDesc";
const FONT_NAME: &str = "fontName";

/// Add `animationKeyframes`, `pageAnimationKeyframes` and `fontFamilyDesc`
/// for the matching name properties of `declaration`
pub(crate) fn resolve_extras(stylesheet: &Stylesheet, declaration: &mut Declaration) {
    let mut extras = Vec::new();
    for (name, value) in declaration.iter() {
        let Some(text) = value.as_str() else {
            continue;
        };
        match name {
            ANIMATION_NAME => extras.push((ANIMATION_KEYFRAMES, keyframes(stylesheet, text))),
            PAGE_ANIMATION_NAME => {
                extras.push((PAGE_ANIMATION_KEYFRAMES, keyframes(stylesheet, text)))
            }
            FONT_FAMILY => extras.push((FONT_FAMILY_DESC, font_faces(stylesheet, text))),
            _ => {}
        }
    }

    for (name, value) in extras {
        declaration.set_property(name, value);
    }
}

/// Frames of every named animation in order, each followed by a
/// `{"animationName": name}` marker frame. Unknown names are skipped.
fn keyframes(stylesheet: &Stylesheet, names: &str) -> Value {
    let mut frames = Vec::new();
    for name in split_names(names) {
        if let Some(Value::Array(list)) = stylesheet.keyframes(name) {
            frames.extend(list.iter().cloned());
            let mut marker = Map::new();
            marker.insert(ANIMATION_NAME.to_string(), Value::from(name));
            frames.push(Value::Object(marker));
        }
    }
    Value::Array(frames)
}

/// One description per family; unregistered families get `{"fontName": name}`
fn font_faces(stylesheet: &Stylesheet, families: &str) -> Value {
    split_names(families)
        .map(|name| {
            stylesheet.font_face(name).cloned().unwrap_or_else(|| {
                let mut font = Map::new();
                font.insert(FONT_NAME.to_string(), Value::from(name));
                Value::Object(font)
            })
        })
        .collect()
}

fn split_names(list: &str) -> impl Iterator<Item = &str> {
    strip_quotes(list.trim())
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .or_else(|| text.strip_prefix('"').and_then(|t| t.strip_suffix('"')))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CssParser;
    use serde_json::json;

    fn sheet() -> Stylesheet {
        CssParser::new()
            .parse(&json!({
                "@KEYFRAMES": {
                    "Color": [{ "backgroundColor": "#f76160", "time": 0 }, { "backgroundColor": "#09ba07", "time": 100 }],
                    "Width": [{ "width": "100px", "time": 0 }]
                },
                "@FONT-FACE": { "myfont": { "fontName": "myfont", "src": ["/common/font.ttf"] } }
            }))
            .unwrap()
    }

    #[test]
    fn test_keyframes_with_markers() {
        let mut dec = Declaration::new();
        dec.set_property("animationName", "'Color, Missing, Width'");
        resolve_extras(&sheet(), &mut dec);

        let expected = json!([
            { "backgroundColor": "#f76160", "time": 0 },
            { "backgroundColor": "#09ba07", "time": 100 },
            { "animationName": "Color" },
            { "width": "100px", "time": 0 },
            { "animationName": "Width" }
        ]);
        assert_eq!(dec.get("animationKeyframes"), Some(&expected));
        assert_eq!(dec.get_length(), 2);
    }

    #[test]
    fn test_page_animation() {
        let mut dec = Declaration::new();
        dec.set_property("pageAnimationName", "Width");
        resolve_extras(&sheet(), &mut dec);
        assert_eq!(
            dec.get("pageAnimationKeyframes"),
            Some(&json!([{ "width": "100px", "time": 0 }, { "animationName": "Width" }]))
        );
    }

    #[test]
    fn test_font_faces_fall_back_to_name() {
        let mut dec = Declaration::new();
        dec.set_property("fontFamily", "\"myfont, serif\"");
        resolve_extras(&sheet(), &mut dec);
        assert_eq!(
            dec.get("fontFamilyDesc"),
            Some(&json!([
                { "fontName": "myfont", "src": ["/common/font.ttf"] },
                { "fontName": "serif" }
            ]))
        );
    }

    #[test]
    fn test_non_string_names_ignored() {
        let mut dec = Declaration::new();
        dec.set_property("fontFamily", 3);
        resolve_extras(&sheet(), &mut dec);
        assert_eq!(dec.get_length(), 1);
    }
}
