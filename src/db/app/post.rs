use uuid::Uuid;

use crate::{
    db::connection,
    errors::AppError,
    models::{App, redis::RedisKey},
    state::RedisClient,
};

/// Writes the app and links it into its category in one MULTI/EXEC block,
/// so an app is never stored without appearing in the category's list.
pub async fn create_app_in_category(
    app: &App,
    category_id: Uuid,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = connection(&redis).await?;
    let fields = app.to_redis_hash();

    let _: () = redis::pipe()
        .atomic()
        .hset_multiple(RedisKey::app(app.id), fields.as_slice())
        .ignore()
        .rpush(RedisKey::category_apps(category_id), app.id.to_string())
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
