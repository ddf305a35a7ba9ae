use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::connection,
    errors::AppError,
    models::{Comment, redis::RedisKey},
    state::RedisClient,
};

pub async fn set_app_rating(id: Uuid, rating: i64, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = connection(&redis).await?;

    let _: () = conn
        .hset(RedisKey::app(id), "rating", rating)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}

pub async fn push_comment(id: Uuid, comment: &Comment, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = connection(&redis).await?;

    let json = serde_json::to_string(comment)
        .map_err(|e| AppError::Serialization(format!("Failed to serialize comment: {}", e)))?;

    let _: () = conn
        .rpush(RedisKey::app_comments(id), json)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
