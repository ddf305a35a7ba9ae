use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Rating value of an app nobody has rated yet.
pub const UNRATED: i64 = 0;
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(body: String) -> Self {
        Self {
            body,
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub category: Option<Uuid>,
    pub rating: i64,
    pub comments: Vec<Comment>,
}

impl App {
    pub fn new(name: String, category: Uuid, rating: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category: Some(category),
            rating,
            comments: Vec::new(),
        }
    }

    /// Hash fields only; comments live in their own list.
    pub fn to_redis_hash(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("id".to_string(), self.id.to_string()),
            ("name".to_string(), self.name.clone()),
            ("rating".to_string(), self.rating.to_string()),
        ];
        if let Some(category) = self.category {
            fields.push(("category".to_string(), category.to_string()));
        }
        fields
    }

    pub fn from_redis_hash(
        map: &HashMap<String, String>,
        comments: Vec<Comment>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: map
                .get("id")
                .ok_or_else(|| AppError::Deserialization("Missing id".into()))?
                .parse()
                .map_err(|_| AppError::Deserialization("Invalid UUID for id".into()))?,

            name: map
                .get("name")
                .ok_or_else(|| AppError::Deserialization("Missing name".into()))?
                .clone(),

            category: map
                .get("category")
                .map(|c| c.parse())
                .transpose()
                .map_err(|_| AppError::Deserialization("Invalid UUID for category".into()))?,

            rating: map
                .get("rating")
                .map(|r| r.parse())
                .transpose()
                .map_err(|_| AppError::Deserialization("Invalid rating".into()))?
                .unwrap_or(UNRATED),

            comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_app_defaults() {
        let category = Uuid::new_v4();
        let app = App::new("Chess".into(), category, UNRATED);
        assert_eq!(app.category, Some(category));
        assert_eq!(app.rating, 0);
        assert!(app.comments.is_empty());
    }

    #[test]
    fn test_redis_hash_restores_fields() {
        let app = App::new("Chess".into(), Uuid::new_v4(), 3);
        let map: HashMap<String, String> = app.to_redis_hash().into_iter().collect();
        let comments = vec![Comment::new("Great!".into())];

        let restored = App::from_redis_hash(&map, comments.clone()).unwrap();
        assert_eq!(restored.id, app.id);
        assert_eq!(restored.category, app.category);
        assert_eq!(restored.rating, 3);
        assert_eq!(restored.comments, comments);
    }

    #[test]
    fn test_from_redis_hash_rejects_bad_id() {
        let map = HashMap::from([
            ("id".to_string(), "not-a-uuid".to_string()),
            ("name".to_string(), "Chess".to_string()),
        ]);
        assert!(matches!(
            App::from_redis_hash(&map, Vec::new()),
            Err(AppError::Deserialization(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let app = App::new("Chess".into(), Uuid::nil(), UNRATED);
        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["_id"], json!(app.id.to_string()));
        assert_eq!(value["category"], json!(Uuid::nil().to_string()));
        assert_eq!(value["rating"], json!(0));
        assert_eq!(value["comments"], json!([]));
    }
}
