//! Runs against a live Redis when `REDIS_URL` points at one; each test
//! returns early otherwise.

use std::time::Duration;

use app_catalog_be::{
    catalog::{self, NewApp},
    db::{CatalogStore, RedisStore},
};
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

async fn redis_store() -> Option<RedisStore> {
    let url = std::env::var("REDIS_URL").ok()?;
    let manager = RedisConnectionManager::new(url.as_str()).ok()?;
    let pool = Pool::builder()
        .connection_timeout(Duration::from_secs(2))
        .build(manager)
        .await
        .ok()?;

    if let Err(e) = pool.get().await {
        eprintln!("Skipping Redis tests, {url} unreachable: {e}");
        return None;
    }
    Some(RedisStore::new(pool))
}

fn new_app(name: &str) -> NewApp {
    NewApp {
        name: Some(json!(name)),
        rating: None,
    }
}

#[tokio::test]
async fn test_categories_listed_in_creation_order() {
    let Some(store) = redis_store().await else {
        return;
    };

    let first = catalog::create_category(&store, Some(json!("Games"))).await.unwrap();
    let second = catalog::create_category(&store, Some(json!("Tools"))).await.unwrap();

    let ids: Vec<Uuid> = store
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .filter(|id| *id == first.id || *id == second.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let stored = store.get_category(first.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Games");
    assert!(stored.apps.is_empty());
}

#[tokio::test]
async fn test_add_app_links_category_in_redis() {
    let Some(store) = redis_store().await else {
        return;
    };

    let category = catalog::create_category(&store, Some(json!("Games"))).await.unwrap();
    let chess = catalog::add_app_to_category(&store, category.id, new_app("Chess"))
        .await
        .unwrap();
    let go = catalog::add_app_to_category(&store, category.id, new_app("Go"))
        .await
        .unwrap();

    let stored = store.get_category(category.id).await.unwrap().unwrap();
    assert_eq!(stored.apps, vec![chess.id, go.id]);

    let app = store.get_app(chess.id).await.unwrap().unwrap();
    assert_eq!(app, chess);
    assert_eq!(app.category, Some(category.id));
    assert_eq!(app.rating, 0);

    let populated = catalog::list_categories(&store)
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.id == category.id)
        .unwrap();
    let names: Vec<&str> = populated.apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Chess", "Go"]);

    let missing = catalog::add_app_to_category(&store, Uuid::new_v4(), new_app("Ghost")).await;
    assert!(missing.is_err());
}

#[tokio::test]
async fn test_rating_and_comments_round_trip() {
    let Some(store) = redis_store().await else {
        return;
    };

    let category = catalog::create_category(&store, Some(json!("Games"))).await.unwrap();
    let app = catalog::add_app_to_category(&store, category.id, new_app("Chess"))
        .await
        .unwrap();

    catalog::update_app_rating(&store, app.id, Some(json!(4)))
        .await
        .unwrap();
    assert!(
        catalog::update_app_rating(&store, app.id, Some(json!(6)))
            .await
            .is_err()
    );

    let mut windows = Vec::new();
    for body in ["first", "second", "third"] {
        let before = Utc::now();
        catalog::add_comment(&store, app.id, Some(json!(body)))
            .await
            .unwrap();
        windows.push((before, Utc::now()));
    }

    let stored = store.get_app(app.id).await.unwrap().unwrap();
    assert_eq!(stored.rating, 4);
    assert_eq!(stored.name, "Chess");

    let bodies: Vec<&str> = stored.comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
    for (comment, (before, after)) in stored.comments.iter().zip(&windows) {
        assert!(*before <= comment.date && comment.date <= *after);
    }
}
