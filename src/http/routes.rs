use axum::{
    Router,
    routing::{patch, post},
};

use crate::{
    http::handlers::{
        add_app_handler, add_comment_handler, create_category_handler, list_categories_handler,
        update_rating_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories",
            post(create_category_handler).get(list_categories_handler),
        )
        .route("/categories/{category_id}/apps", post(add_app_handler))
        .route("/apps/{app_id}/rating", patch(update_rating_handler))
        .route("/apps/{app_id}/comments", post(add_comment_handler))
        .with_state(state)
}
