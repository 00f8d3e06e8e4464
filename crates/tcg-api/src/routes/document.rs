//! # Document Processing Endpoint
//!
//! `POST /api/process-document` — multipart file upload through the
//! extractor, with the extracted text stamped for privacy. Extraction
//! failures degrade inside the result payload; only a missing file or
//! content type is a request error.

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tcg_extract::{extract, Extraction};
use tcg_privacy::{DataType, GdprMetadata};

use crate::error::AppError;
use crate::state::AppState;

/// Response for one processed document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub filename: String,
    pub processed_at: DateTime<Utc>,
    pub result: Extraction,
    pub gdpr_compliant: bool,
    pub gdpr: GdprMetadata,
}

/// Build the document router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/process-document", post(process_document))
}

/// POST /api/process-document — Extract text from an uploaded document.
#[utoipa::path(
    post,
    path = "/api/process-document",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Extracted text with format metadata"),
        (status = 422, description = "Missing file or content type", body = crate::error::ErrorBody),
    ),
    tag = "documents"
)]
pub(crate) async fn process_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentResponse>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::Validation("a file field is required".to_string()))?;

    let filename = field.file_name().unwrap_or("upload").to_string();
    let content_type = field
        .content_type()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("file type not specified".to_string()))?;
    let subtype = content_type
        .rsplit('/')
        .next()
        .unwrap_or(content_type.as_str())
        .to_string();

    let content = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;

    let mut result = extract(&content, &subtype);

    // Stamp the extracted text; the result carries whatever survived.
    let stamped = state.stamper.stamp(
        serde_json::json!({"content": result.extracted_text}),
        DataType::Requirements,
    );
    if let Some(content) = stamped.field("content").and_then(|v| v.as_str()) {
        result.extracted_text = content.to_string();
    }

    Ok(Json(DocumentResponse {
        filename,
        processed_at: Utc::now(),
        result,
        gdpr_compliant: true,
        gdpr: stamped.gdpr,
    }))
}
