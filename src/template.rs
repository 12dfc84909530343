//! Naive `{field}` token substitution for markup templates.
//!
//! Both functions are total: tokens without a matching field are left in
//! place, and neither input is ever mutated. The rest of the crate goes
//! through this module only, so a stricter templating engine can be swapped
//! in without touching the coordinator.

use serde_json::{Map, Value};

/// Render a template against a record's fields.
///
/// Every occurrence of `{fieldName}` is replaced by the field's string value.
/// String fields render without quotes; other values use their JSON form.
pub fn render(template: &str, fields: &Map<String, Value>) -> String {
    let mut output = template.to_string();
    for (name, value) in fields {
        let token = format!("{{{}}}", name);
        if output.contains(&token) {
            output = output.replace(&token, &value_text(value));
        }
    }
    output
}

/// Render a template against a fixed list of name/value pairs.
pub fn render_pairs(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (name, value) in pairs {
        output = output.replace(&format!("{{{}}}", name), value);
    }
    output
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
