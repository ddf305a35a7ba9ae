use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::{app, category},
    errors::AppError,
    models::{App, Category, Comment},
    state::RedisClient,
};

/// Persistence port for the catalog. Handlers only see this trait, so the
/// Redis backend can be swapped for [`MemoryStore`](crate::db::MemoryStore).
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn insert_category(&self, category: &Category) -> Result<(), AppError>;

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, AppError>;

    /// All categories in creation order, with unresolved `apps` references.
    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;

    /// Stores `app` and appends its id to the category's `apps` as one unit.
    async fn insert_app_into_category(
        &self,
        app: &App,
        category_id: Uuid,
    ) -> Result<(), AppError>;

    async fn get_app(&self, id: Uuid) -> Result<Option<App>, AppError>;

    async fn get_apps(&self, ids: &[Uuid]) -> Result<Vec<App>, AppError>;

    async fn set_app_rating(&self, id: Uuid, rating: i64) -> Result<(), AppError>;

    async fn push_comment(&self, id: Uuid, comment: &Comment) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct RedisStore {
    redis: RedisClient,
}

impl RedisStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl CatalogStore for RedisStore {
    async fn insert_category(&self, category: &Category) -> Result<(), AppError> {
        category::create_category(category, self.redis.clone()).await
    }

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, AppError> {
        category::get_category(id, self.redis.clone()).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        category::list_categories(self.redis.clone()).await
    }

    async fn insert_app_into_category(
        &self,
        app: &App,
        category_id: Uuid,
    ) -> Result<(), AppError> {
        app::create_app_in_category(app, category_id, self.redis.clone()).await
    }

    async fn get_app(&self, id: Uuid) -> Result<Option<App>, AppError> {
        app::get_app(id, self.redis.clone()).await
    }

    async fn get_apps(&self, ids: &[Uuid]) -> Result<Vec<App>, AppError> {
        app::get_apps(ids, self.redis.clone()).await
    }

    async fn set_app_rating(&self, id: Uuid, rating: i64) -> Result<(), AppError> {
        app::set_app_rating(id, rating, self.redis.clone()).await
    }

    async fn push_comment(&self, id: Uuid, comment: &Comment) -> Result<(), AppError> {
        app::push_comment(id, comment, self.redis.clone()).await
    }
}
