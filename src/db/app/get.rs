use redis::AsyncCommands;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    db::connection,
    errors::AppError,
    models::{App, Comment, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_app(id: Uuid, redis: RedisClient) -> Result<Option<App>, AppError> {
    let mut conn = connection(&redis).await?;

    let map: HashMap<String, String> = conn
        .hgetall(RedisKey::app(id))
        .await
        .map_err(AppError::RedisCommandError)?;

    if map.is_empty() {
        return Ok(None);
    }

    let raw_comments: Vec<String> = conn
        .lrange(RedisKey::app_comments(id), 0, -1)
        .await
        .map_err(AppError::RedisCommandError)?;

    let comments = raw_comments
        .iter()
        .map(|json| {
            serde_json::from_str::<Comment>(json).map_err(|e| {
                AppError::Deserialization(format!("Failed to deserialize comment: {}", e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    App::from_redis_hash(&map, comments).map(Some)
}

/// Resolves app references in order, skipping any that no longer exist.
pub async fn get_apps(ids: &[Uuid], redis: RedisClient) -> Result<Vec<App>, AppError> {
    let mut apps = Vec::with_capacity(ids.len());
    for &id in ids {
        match get_app(id, redis.clone()).await? {
            Some(app) => apps.push(app),
            None => tracing::warn!("Dangling app reference {}", id),
        }
    }

    Ok(apps)
}
