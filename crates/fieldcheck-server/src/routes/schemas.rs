use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/schemas — names of all configured schemas.
pub async fn list_schemas(State(app): State<AppState>) -> Json<serde_json::Value> {
    let names: Vec<&String> = app.config.schemas.keys().collect();
    Json(serde_json::json!({ "schemas": names }))
}

/// GET /api/schemas/:name — the field definitions of one schema.
pub async fn get_schema(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let schema = app.config.schema(&name)?;
    let fields = serde_json::to_value(schema)?;
    Ok(Json(serde_json::json!({
        "name": name,
        "fields": fields,
    })))
}

/// POST /api/schemas/:name/validate — validate a JSON payload.
///
/// 200 with `validated_data` on success, 400 with the field errors map on
/// failure. An unreadable body keeps the extractor's status with an
/// `{"error": ...}` body.
pub async fn validate_payload(
    State(app): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let schema = app.config.schema(&name)?;
    let Json(payload) = payload.map_err(|r| {
        tracing::debug!(schema = %name, error = %r.body_text(), "unreadable payload");
        AppError::rejected(r.status(), r.body_text())
    })?;
    match schema.validate(&payload) {
        Ok(validated) => {
            tracing::debug!(schema = %name, fields = validated.len(), "payload accepted");
            Ok(Json(serde_json::json!({ "validated_data": validated })))
        }
        Err(errors) => {
            tracing::info!(schema = %name, errors = %errors, "payload rejected");
            Err(AppError::validation(errors))
        }
    }
}
