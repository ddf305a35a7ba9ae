use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    catalog::{required_name, required_text},
    db::CatalogStore,
    errors::AppError,
    models::{
        App, Comment,
        app::{MAX_RATING, MIN_RATING, UNRATED},
    },
};

/// Body accepted when adding an app to a category. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NewApp {
    pub name: Option<Value>,
    pub rating: Option<Value>,
}

/// Integer coercion with `parseInt` leniency: numbers are truncated, strings
/// are read up to the first non-digit after an optional sign.
pub fn coerce_rating(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => {
            let s = s.trim_start();
            let (sign, rest) = match s.strip_prefix('-') {
                Some(rest) => (-1i64, rest),
                None => (1, s.strip_prefix('+').unwrap_or(s)),
            };
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<i64>().ok().map(|n| sign * n)
        }
        _ => None,
    }
}

fn invalid_rating(raw: Option<&Value>) -> AppError {
    let shown = raw.map_or_else(|| "missing".to_string(), Value::to_string);
    AppError::BadRequest(format!("Invalid rating value: {shown}"))
}

async fn require_app(store: &dyn CatalogStore, app_id: Uuid) -> Result<App, AppError> {
    store
        .get_app(app_id)
        .await?
        .ok_or_else(|| AppError::NotFound("App not found".into()))
}

pub async fn add_app_to_category(
    store: &dyn CatalogStore,
    category_id: Uuid,
    payload: NewApp,
) -> Result<App, AppError> {
    let category = store
        .get_category(category_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".into()))?;

    let name = required_name("App", payload.name)?;
    let rating = match payload.rating.as_ref() {
        None => UNRATED,
        Some(raw) => match coerce_rating(raw) {
            Some(r) if r == UNRATED || (MIN_RATING..=MAX_RATING).contains(&r) => r,
            _ => return Err(invalid_rating(Some(raw))),
        },
    };

    let app = App::new(name, category.id, rating);
    store.insert_app_into_category(&app, category.id).await?;
    Ok(app)
}

pub async fn update_app_rating(
    store: &dyn CatalogStore,
    app_id: Uuid,
    raw: Option<Value>,
) -> Result<App, AppError> {
    let mut app = require_app(store, app_id).await?;

    let rating = raw
        .as_ref()
        .and_then(coerce_rating)
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| invalid_rating(raw.as_ref()))?;

    store.set_app_rating(app_id, rating).await?;
    app.rating = rating;
    Ok(app)
}

pub async fn add_comment(
    store: &dyn CatalogStore,
    app_id: Uuid,
    body: Option<Value>,
) -> Result<Comment, AppError> {
    require_app(store, app_id).await?;

    let body = required_text(
        body,
        || "Comment body is required".into(),
        || "Comment body must be a string".into(),
    )?;

    let comment = Comment::new(body);
    store.push_comment(app_id, &comment).await?;
    Ok(comment)
}
