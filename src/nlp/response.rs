//! Turning raw model output into entry operations.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    core::errors::{Result, TrackerError},
    domain::EntryPatch,
};

pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "Failed to process your request. The model did not return valid JSON or a JSON array.";

/// One operation extracted from the model output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntakeOperation {
    Upsert { date: NaiveDate, patch: EntryPatch },
    Delete { date: NaiveDate },
}

/// What to do with one element of the model's array.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemInterpretation {
    Apply(IntakeOperation),
    /// No `entry_date`; the element is dropped without a result.
    Skip,
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    entry_date: Option<String>,
    #[serde(default)]
    target_hours: Option<f64>,
    #[serde(default)]
    actual_hours: Option<f64>,
    #[serde(default)]
    operation: Option<String>,
}

/// Removes Markdown code-fence markers the model tends to wrap JSON in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses the model output as a JSON array, returning its elements untouched.
pub fn parse_operations(text: &str) -> Result<Vec<Value>> {
    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => {
            tracing::error!(
                response = %text,
                kind = json_kind(&other),
                "model response is not a JSON array"
            );
            Err(TrackerError::MalformedResponse(MALFORMED_RESPONSE_MESSAGE.into()))
        }
        Err(err) => {
            tracing::error!(response = %text, error = %err, "model response is not valid JSON");
            Err(TrackerError::MalformedResponse(MALFORMED_RESPONSE_MESSAGE.into()))
        }
    }
}

/// Interprets one array element independently of its siblings.
pub fn interpret_item(value: &Value) -> ItemInterpretation {
    if !value.is_object() {
        return ItemInterpretation::Invalid(format!(
            "expected an object, found {}",
            json_kind(value)
        ));
    }
    let raw: RawItem = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(err) => return ItemInterpretation::Invalid(err.to_string()),
    };
    let Some(date_text) = raw.entry_date.filter(|text| !text.trim().is_empty()) else {
        return ItemInterpretation::Skip;
    };
    let date = match NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return ItemInterpretation::Invalid(format!("invalid entry_date `{date_text}`"))
        }
    };

    if raw.operation.as_deref() == Some("delete") {
        return ItemInterpretation::Apply(IntakeOperation::Delete { date });
    }

    let patch = EntryPatch::new(raw.target_hours, raw.actual_hours);
    if let Some(field) = patch.invalid_field() {
        return ItemInterpretation::Invalid(format!("{field} must be a non-negative number"));
    }
    ItemInterpretation::Apply(IntakeOperation::Upsert { date, patch })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fenced_array_is_accepted() {
        let text = "```json\n[{\"entry_date\": \"2025-01-02\", \"operation\": \"delete\"}]\n```";
        let items = parse_operations(text).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        let err = parse_operations("{\"entry_date\": \"2025-01-02\"}").unwrap_err();
        assert!(matches!(err, TrackerError::MalformedResponse(_)));
    }

    #[test]
    fn prose_is_malformed() {
        assert!(parse_operations("Sure! Here you go.").is_err());
    }

    #[test]
    fn missing_date_is_skipped() {
        assert_eq!(
            interpret_item(&json!({"target_hours": 3, "operation": "upsert"})),
            ItemInterpretation::Skip
        );
        assert_eq!(
            interpret_item(&json!({"entry_date": null, "actual_hours": 3})),
            ItemInterpretation::Skip
        );
        assert_eq!(
            interpret_item(&json!({"entry_date": "", "actual_hours": 3})),
            ItemInterpretation::Skip
        );
    }

    #[test]
    fn nulls_become_untouched_fields() {
        let item = json!({
            "entry_date": "2025-01-02",
            "target_hours": null,
            "actual_hours": 4.5,
            "operation": "upsert"
        });
        assert_eq!(
            interpret_item(&item),
            ItemInterpretation::Apply(IntakeOperation::Upsert {
                date: date(2025, 1, 2),
                patch: EntryPatch::new(None, Some(4.5)),
            })
        );
    }

    #[test]
    fn unknown_operation_defaults_to_upsert() {
        let item = json!({"entry_date": "2025-01-02", "target_hours": 0});
        assert!(matches!(
            interpret_item(&item),
            ItemInterpretation::Apply(IntakeOperation::Upsert { .. })
        ));
    }

    #[test]
    fn delete_ignores_hours() {
        let item = json!({"entry_date": "2025-01-02", "target_hours": 5, "operation": "delete"});
        assert_eq!(
            interpret_item(&item),
            ItemInterpretation::Apply(IntakeOperation::Delete {
                date: date(2025, 1, 2)
            })
        );
    }

    #[test]
    fn bad_fields_are_invalid() {
        assert!(matches!(
            interpret_item(&json!({"entry_date": "tomorrow"})),
            ItemInterpretation::Invalid(_)
        ));
        assert!(matches!(
            interpret_item(&json!({"entry_date": "2025-01-02", "actual_hours": "six"})),
            ItemInterpretation::Invalid(_)
        ));
        assert!(matches!(
            interpret_item(&json!({"entry_date": "2025-01-02", "actual_hours": -2})),
            ItemInterpretation::Invalid(_)
        ));
        assert!(matches!(
            interpret_item(&json!("2025-01-02")),
            ItemInterpretation::Invalid(_)
        ));
    }
}
