use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use fieldcheck_core::detail::{ErrorCode, ErrorDetail, FieldErrors};
use fieldcheck_core::field::UNKNOWN_ACTOR_INPUT;

use crate::error::AppError;

#[derive(serde::Deserialize)]
pub struct ResolveQuery {
    /// Absent resolves as the empty token and fails like any bad input.
    #[serde(default)]
    pub input: String,
}

/// GET /api/actors/resolve?input=team:1 — resolve a single actor token.
///
/// Failures are reported under the `input` key like any other field error.
pub async fn resolve_actor(
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(query) = query.map_err(|r| AppError::rejected(r.status(), r.body_text()))?;
    match fieldcheck_core::resolve_actor(&query.input) {
        Ok(actor) => Ok(Json(serde_json::json!({
            "type": actor.kind,
            "id": actor.id,
            "identifier": actor.identifier(),
        }))),
        Err(_) => {
            let mut errors = FieldErrors::new();
            errors.insert(
                "input",
                ErrorDetail::new(UNKNOWN_ACTOR_INPUT, ErrorCode::UnknownActor),
            );
            Err(AppError::validation(errors))
        }
    }
}
