use serde_json::Value;

use crate::{
    catalog::required_name,
    db::CatalogStore,
    errors::AppError,
    models::{Category, PopulatedCategory},
};

pub async fn create_category(
    store: &dyn CatalogStore,
    name: Option<Value>,
) -> Result<Category, AppError> {
    let name = required_name("Category", name)?;
    let category = Category::new(name);
    store.insert_category(&category).await?;
    Ok(category)
}

/// Lists every category with its app references resolved.
pub async fn list_categories(
    store: &dyn CatalogStore,
) -> Result<Vec<PopulatedCategory>, AppError> {
    let categories = store.list_categories().await?;

    let mut populated = Vec::with_capacity(categories.len());
    for category in categories {
        let apps = store.get_apps(&category.apps).await?;
        populated.push(category.populate(apps));
    }

    Ok(populated)
}
