use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    catalog::{self, NewApp},
    errors::AppError,
    http::handlers::{json_body, parse_id},
    models::{App, Category, PopulatedCategory},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateCategoryPayload {
    pub name: Option<Value>,
}

#[axum::debug_handler]
pub async fn create_category_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let payload = json_body(payload)?;

    let category = catalog::create_category(state.store.as_ref(), payload.name)
        .await
        .map_err(|e| {
            tracing::error!("Error creating category: {}", e);
            e
        })?;

    tracing::info!("Created category {}", category.id);
    Ok((StatusCode::CREATED, Json(category)))
}

#[axum::debug_handler]
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PopulatedCategory>>, AppError> {
    let categories = catalog::list_categories(state.store.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Error listing categories: {}", e);
            e
        })?;

    tracing::info!("Listed {} categories", categories.len());
    Ok(Json(categories))
}

#[axum::debug_handler]
pub async fn add_app_handler(
    Path(category_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<NewApp>, JsonRejection>,
) -> Result<(StatusCode, Json<App>), AppError> {
    let category_id = parse_id(&category_id, "category")?;
    let payload = json_body(payload)?;

    let app = catalog::add_app_to_category(state.store.as_ref(), category_id, payload)
        .await
        .map_err(|e| {
            tracing::error!("Error adding app to category {}: {}", category_id, e);
            e
        })?;

    tracing::info!("Added app {} to category {}", app.id, category_id);
    Ok((StatusCode::CREATED, Json(app)))
}
