use redis::AsyncCommands;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    db::connection,
    errors::AppError,
    models::{Category, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_category(id: Uuid, redis: RedisClient) -> Result<Option<Category>, AppError> {
    let mut conn = connection(&redis).await?;

    let map: HashMap<String, String> = conn
        .hgetall(RedisKey::category(id))
        .await
        .map_err(AppError::RedisCommandError)?;

    if map.is_empty() {
        return Ok(None);
    }

    let app_ids: Vec<String> = conn
        .lrange(RedisKey::category_apps(id), 0, -1)
        .await
        .map_err(AppError::RedisCommandError)?;

    let apps = app_ids
        .iter()
        .map(|s| {
            Uuid::parse_str(s).map_err(|e| {
                AppError::Deserialization(format!("Invalid UUID in category apps: {}", e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Category::from_redis_hash(&map, apps).map(Some)
}

pub async fn list_categories(redis: RedisClient) -> Result<Vec<Category>, AppError> {
    let mut conn = connection(&redis).await?;

    let ids: Vec<String> = conn
        .lrange(RedisKey::categories(), 0, -1)
        .await
        .map_err(AppError::RedisCommandError)?;
    drop(conn);

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        let id = Uuid::parse_str(&id).map_err(|e| {
            AppError::Deserialization(format!("Invalid UUID in category index: {}", e))
        })?;

        match get_category(id, redis.clone()).await? {
            Some(category) => categories.push(category),
            None => tracing::warn!("Category {} is indexed but has no data", id),
        }
    }

    Ok(categories)
}
