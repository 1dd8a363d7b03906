use serde_json::{Map, Value};

use crate::value_types::NEW_LINE;

/// Splits text on newlines so every line can carry its own block attributes.
///
/// Empty lines become a single `"\n"` token. A trailing empty segment (text
/// ending in a newline) is not emitted.
pub fn tokenize_with_newlines(text: &str) -> Vec<String> {
    if text == NEW_LINE {
        return vec![text.to_string()];
    }

    let lines: Vec<&str> = text.split(NEW_LINE).collect();
    if lines.len() == 1 {
        return vec![text.to_string()];
    }

    let last = lines.len() - 1;
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| match (i == last, line.is_empty()) {
            (false, true) => Some(NEW_LINE.to_string()),
            (true, true) => None,
            (_, false) => Some((*line).to_string()),
        })
        .collect()
}

/// Expands one raw op into the ops that should be converted in its place.
///
/// Only ops whose `insert` is a multi-line string are split; every resulting
/// op carries a copy of the original attributes. Anything else, including
/// records that are not objects, is passed through as-is.
pub fn denormalize(op: &Value) -> Vec<Value> {
    let Some(text) = op.get("insert").and_then(Value::as_str) else {
        return vec![op.clone()];
    };
    if text == NEW_LINE || !text.contains(NEW_LINE) {
        return vec![op.clone()];
    }

    tokenize_with_newlines(text)
        .into_iter()
        .map(|line| {
            let mut split = Map::new();
            split.insert("insert".to_string(), Value::String(line));
            if let Some(attributes) = op.get("attributes") {
                split.insert("attributes".to_string(), attributes.clone());
            }
            Value::Object(split)
        })
        .collect()
}
