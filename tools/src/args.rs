//! Argument normalization for tool inputs.
//!
//! Callers reach the adapter through two shapes: a flat key→value mapping, or
//! the wrapped form a schema-validated request object produces when it is
//! keyed under its first field (`{"isbn": {"isbn": …, "qty": …}}`). Each
//! operation defines one serde input contract, and [`normalize`] is the single
//! pure conversion from either accepted shape into it — no per-call-site
//! shape branching.

use bookdesk_core::{ToolError, ToolResult};
use bookdesk_store::StoreError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parses a raw JSON input string into the operation's input contract,
/// accepting both the flat and the wrapped argument shape.
///
/// # Errors
///
/// Returns a descriptive [`ToolError`] when the input is not JSON or matches
/// neither shape.
pub fn normalize<T: DeserializeOwned>(input: &str) -> Result<T, ToolError> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| ToolError::new(format!("invalid input JSON: {e}")))?;
    from_shape(value)
}

/// Converts an already-parsed JSON value into the input contract.
///
/// The flat shape wins; failing that, any object-valued field that satisfies
/// the contract is treated as the wrapped request object.
///
/// # Errors
///
/// Returns a [`ToolError`] describing the flat-shape mismatch when neither
/// shape fits.
pub fn from_shape<T: DeserializeOwned>(value: Value) -> Result<T, ToolError> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(args) => Ok(args),
        Err(flat_err) => {
            if let Value::Object(map) = &value {
                for nested in map.values().filter(|v| v.is_object()) {
                    if let Ok(args) = serde_json::from_value::<T>(nested.clone()) {
                        return Ok(args);
                    }
                }
            }
            Err(ToolError::new(format!("malformed arguments: {flat_err}")))
        }
    }
}

/// Maps a store failure to the adapter's result contract: domain failures
/// become an `Ok` `{"error": message}` payload, infrastructure failures are
/// logged and surfaced as a generic [`ToolError`].
pub fn store_error_result(err: StoreError) -> ToolResult {
    match err {
        StoreError::Domain(domain) => {
            Ok(serde_json::json!({ "error": domain.to_string() }).to_string())
        }
        StoreError::Database(db) => {
            tracing::error!(error = %db, "store failure during tool call");
            Err(ToolError::new("persistence failure, see server logs"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct RestockArgs {
        isbn: String,
        qty: i64,
    }

    #[test]
    fn test_flat_shape() {
        let args: RestockArgs =
            normalize(&json!({"isbn": "ISBN-1", "qty": 3}).to_string()).expect("flat shape");
        assert_eq!(
            args,
            RestockArgs {
                isbn: "ISBN-1".to_string(),
                qty: 3
            }
        );
    }

    #[test]
    fn test_wrapped_shape() {
        let wrapped = json!({"isbn": {"isbn": "ISBN-1", "qty": 3}});
        let args: RestockArgs = normalize(&wrapped.to_string()).expect("wrapped shape");
        assert_eq!(args.isbn, "ISBN-1");
        assert_eq!(args.qty, 3);
    }

    #[test]
    fn test_missing_field_is_descriptive() {
        let err = normalize::<RestockArgs>(&json!({"isbn": "ISBN-1"}).to_string())
            .expect_err("must fail");
        assert!(err.message.contains("malformed arguments"));
    }

    #[test]
    fn test_not_json_at_all() {
        let err = normalize::<RestockArgs>("not json").expect_err("must fail");
        assert!(err.message.contains("invalid input JSON"));
    }

    #[test]
    fn test_domain_error_becomes_structured_payload() {
        let err = StoreError::Domain(bookdesk_core::DomainError::book_not_found("X"));
        let result = store_error_result(err).expect("structured result");
        let value: Value = serde_json::from_str(&result).expect("valid JSON");
        assert_eq!(value["error"], "book with ISBN X not found");
    }

    #[test]
    fn test_database_error_is_a_generic_tool_error() {
        let err = StoreError::Database(sqlx::Error::RowNotFound);
        let result = store_error_result(err);
        assert!(result.is_err());
    }
}
