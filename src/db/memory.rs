use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::CatalogStore,
    errors::AppError,
    models::{App, Category, Comment},
};

#[derive(Debug, Default)]
struct Collections {
    category_order: Vec<Uuid>,
    categories: HashMap<Uuid, Category>,
    apps: HashMap<Uuid, App>,
}

/// Process-local store with the same semantics as the Redis backend.
/// Every mutation runs under a single write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn insert_category(&self, category: &Category) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner.category_order.push(category.id);
        inner.categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, AppError> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .category_order
            .iter()
            .filter_map(|id| inner.categories.get(id).cloned())
            .collect())
    }

    async fn insert_app_into_category(
        &self,
        app: &App,
        category_id: Uuid,
    ) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let category = inner
            .categories
            .get_mut(&category_id)
            .ok_or_else(|| AppError::NotFound("Category not found".into()))?;
        category.apps.push(app.id);
        inner.apps.insert(app.id, app.clone());
        Ok(())
    }

    async fn get_app(&self, id: Uuid) -> Result<Option<App>, AppError> {
        Ok(self.inner.read().await.apps.get(&id).cloned())
    }

    async fn get_apps(&self, ids: &[Uuid]) -> Result<Vec<App>, AppError> {
        let inner = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| inner.apps.get(id).cloned())
            .collect())
    }

    async fn set_app_rating(&self, id: Uuid, rating: i64) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let app = inner
            .apps
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("App not found".into()))?;
        app.rating = rating;
        Ok(())
    }

    async fn push_comment(&self, id: Uuid, comment: &Comment) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let app = inner
            .apps
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("App not found".into()))?;
        app.comments.push(comment.clone());
        Ok(())
    }
}
