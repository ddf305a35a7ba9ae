pub mod app;
pub mod category;

use axum::{Json, extract::rejection::JsonRejection};
use uuid::Uuid;

use crate::errors::AppError;

pub use app::{add_comment_handler, update_rating_handler};
pub use category::{add_app_handler, create_category_handler, list_categories_handler};

pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {entity} id: {raw}")))
}

pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
