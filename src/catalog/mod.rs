//! Catalog operations: validate input, touch the store, hand back documents.
//! Nothing here knows about HTTP.

pub mod app;
pub mod category;

pub use app::{NewApp, add_app_to_category, add_comment, coerce_rating, update_app_rating};
pub use category::{create_category, list_categories};

use serde_json::Value;

use crate::errors::AppError;

/// Casts a JSON scalar to text: strings as-is, numbers and booleans through
/// their JSON spelling. `Err` for objects and arrays, `Ok(None)` for null.
pub(crate) fn coerce_text(value: &Value) -> Result<Option<String>, ()> {
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Null => Ok(None),
        Value::Array(_) | Value::Object(_) => Err(()),
    }
}

/// Coerces `field` to text and rejects it when missing or blank.
pub(crate) fn required_text(
    field: Option<Value>,
    required: impl Fn() -> String,
    not_text: impl Fn() -> String,
) -> Result<String, AppError> {
    let text = match field.as_ref().map(coerce_text) {
        None => None,
        Some(Ok(text)) => text,
        Some(Err(())) => return Err(AppError::BadRequest(not_text())),
    };

    text.filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(required()))
}

/// Like [`required_text`], but the stored name is trimmed.
pub(crate) fn required_name(entity: &str, name: Option<Value>) -> Result<String, AppError> {
    required_text(
        name,
        || format!("{entity} validation failed: name is required"),
        || format!("{entity} validation failed: name must be a string"),
    )
    .map(|n| n.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_text(&json!("Chess")), Ok(Some("Chess".to_string())));
        assert_eq!(coerce_text(&json!(123)), Ok(Some("123".to_string())));
        assert_eq!(coerce_text(&json!(1.5)), Ok(Some("1.5".to_string())));
        assert_eq!(coerce_text(&json!(false)), Ok(Some("false".to_string())));
        assert_eq!(coerce_text(&Value::Null), Ok(None));
        assert!(coerce_text(&json!([1])).is_err());
        assert!(coerce_text(&json!({ "a": 1 })).is_err());
    }

    #[test]
    fn test_required_name() {
        assert_eq!(
            required_name("Category", Some("  Games ".into())).unwrap(),
            "Games"
        );
        assert!(required_name("Category", None).is_err());
        assert!(required_name("Category", Some("".into())).is_err());

        assert!(required_name("Category", Some(Value::Null)).is_err());
        assert_eq!(required_name("Category", Some(json!(123))).unwrap(), "123");

        let err = required_name("App", Some("   ".into())).unwrap_err();
        assert_eq!(err.to_response().1, "App validation failed: name is required");

        let err = required_name("App", Some(json!({ "first": "Chess" }))).unwrap_err();
        assert_eq!(
            err.to_response().1,
            "App validation failed: name must be a string"
        );
    }
}
