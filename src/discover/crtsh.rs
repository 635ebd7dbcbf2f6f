use std::collections::HashSet;

use serde_json::Value;

use crate::error::ParseError;

/// Organization search URL: `<base>?o=<keyword>&output=json`, keyword percent-encoded.
pub fn search_url(base: &str, keyword: &str) -> String {
    format!("{}?o={}&output=json", base, urlencoding::encode(keyword))
}

/// Fold the `name_value` fields of a crt.sh JSON array into a set of
/// trimmed, lowercased names.
pub fn build_name_set(raw: &str) -> Result<HashSet<String>, ParseError> {
    let v: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("JSON parse error: {}", e);
            return Err(ParseError::Json(e));
        }
    };
    let Some(arr) = v.as_array() else {
        let kind = json_kind(&v);
        tracing::error!("JSON parse error: expected array, got {}", kind);
        return Err(ParseError::NotAnArray(kind));
    };

    let mut out = HashSet::new();
    for (idx, item) in arr.iter().enumerate() {
        let Some(name) = item.get("name_value").and_then(|n| n.as_str()) else {
            tracing::warn!("record {} has no string name_value, skipping", idx);
            continue;
        };
        // name_value can contain multiple names separated by newlines
        for n in name.lines() {
            let s = n.trim().to_lowercase();
            if !s.is_empty() {
                out.insert(s);
            }
        }
    }
    Ok(out)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
