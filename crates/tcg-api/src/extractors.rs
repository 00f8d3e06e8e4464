//! # Validated JSON Extraction
//!
//! Request bodies arrive as `Result<Json<T>, JsonRejection>` so malformed
//! JSON becomes a structured 422 instead of axum's default rejection, and
//! every body type runs its own [`Validate`] check before the handler sees
//! it.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Semantic validation for a request body, run after deserialization.
pub trait Validate {
    /// Return a human-readable reason when the body is invalid.
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap a JSON body, mapping rejections and validation failures to 422.
pub fn extract_validated_json<T: Validate>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Body {
        ok: bool,
    }

    impl Validate for Body {
        fn validate(&self) -> Result<(), String> {
            if self.ok {
                Ok(())
            } else {
                Err("not ok".to_string())
            }
        }
    }

    #[test]
    fn valid_body_passes_through() {
        let result = extract_validated_json(Ok(Json(Body { ok: true })));
        assert!(result.is_ok());
    }

    #[test]
    fn failing_validation_becomes_validation_error() {
        let result = extract_validated_json(Ok(Json(Body { ok: false })));
        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "not ok"),
            other => panic!("expected validation error, got {:?}", other.is_ok()),
        }
    }
}
