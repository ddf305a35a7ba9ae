pub mod app;
pub mod category;
pub mod memory;
pub mod store;

use bb8::PooledConnection;
use bb8_redis::RedisConnectionManager;

pub use memory::MemoryStore;
pub use store::{CatalogStore, RedisStore};

use crate::{errors::AppError, state::RedisClient};

pub(crate) async fn connection(
    redis: &RedisClient,
) -> Result<PooledConnection<'_, RedisConnectionManager>, AppError> {
    redis.get().await.map_err(AppError::from)
}
