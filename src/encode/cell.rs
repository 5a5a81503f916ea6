use serde_json::Value;

use crate::core::ValueKind;

/// Text form of one cell. Absent and null values become the empty string.
#[must_use]
pub fn cell_text(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match ValueKind::of(value) {
        ValueKind::Null => String::new(),
        ValueKind::Text => value.as_str().unwrap_or_default().to_owned(),
        ValueKind::Boolean | ValueKind::Integer | ValueKind::Float | ValueKind::Composite => {
            value.to_string()
        }
    }
}
