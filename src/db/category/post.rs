use crate::{
    db::connection,
    errors::AppError,
    models::{Category, redis::RedisKey},
    state::RedisClient,
};

pub async fn create_category(category: &Category, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = connection(&redis).await?;
    let fields = category.to_redis_hash();

    let _: () = redis::pipe()
        .atomic()
        .hset_multiple(RedisKey::category(category.id), fields.as_slice())
        .ignore()
        .rpush(RedisKey::categories(), category.id.to_string())
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
