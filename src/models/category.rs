use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::AppError, models::App};

/// A category as stored: `apps` holds references only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub apps: Vec<Uuid>,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            apps: Vec::new(),
        }
    }

    pub fn to_redis_hash(&self) -> Vec<(String, String)> {
        vec![
            ("id".to_string(), self.id.to_string()),
            ("name".to_string(), self.name.clone()),
        ]
    }

    pub fn from_redis_hash(
        map: &HashMap<String, String>,
        apps: Vec<Uuid>,
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

            apps,
        })
    }

    /// Replaces the reference list with the resolved app documents.
    pub fn populate(self, apps: Vec<App>) -> PopulatedCategory {
        PopulatedCategory {
            id: self.id,
            name: self.name,
            apps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedCategory {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub apps: Vec<App>,
}
