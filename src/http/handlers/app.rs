use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    catalog,
    errors::AppError,
    http::handlers::{json_body, parse_id},
    models::{App, Comment},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateRatingPayload {
    pub rating: Option<Value>,
}

#[axum::debug_handler]
pub async fn update_rating_handler(
    Path(app_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateRatingPayload>, JsonRejection>,
) -> Result<Json<App>, AppError> {
    let app_id = parse_id(&app_id, "app")?;
    let payload = json_body(payload)?;

    let app = catalog::update_app_rating(state.store.as_ref(), app_id, payload.rating)
        .await
        .map_err(|e| {
            tracing::error!("Error updating rating of app {}: {}", app_id, e);
            e
        })?;

    tracing::info!("Rated app {} with {}", app_id, app.rating);
    Ok(Json(app))
}

#[derive(Debug, Deserialize)]
pub struct AddCommentPayload {
    pub body: Option<Value>,
}

#[axum::debug_handler]
pub async fn add_comment_handler(
    Path(app_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<AddCommentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let app_id = parse_id(&app_id, "app")?;
    let payload = json_body(payload)?;

    let comment = catalog::add_comment(state.store.as_ref(), app_id, payload.body)
        .await
        .map_err(|e| {
            tracing::error!("Error commenting on app {}: {}", app_id, e);
            e
        })?;

    tracing::info!("Comment added to app {}", app_id);
    Ok((StatusCode::CREATED, Json(comment)))
}
