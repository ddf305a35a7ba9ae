use uuid::Uuid;

pub struct RedisKey;

impl RedisKey {
    pub fn categories() -> String {
        "categories".into()
    }

    pub fn category(id: Uuid) -> String {
        format!("category:{id}")
    }

    pub fn category_apps(id: Uuid) -> String {
        format!("category:{id}:apps")
    }

    pub fn app(id: Uuid) -> String {
        format!("app:{id}")
    }

    pub fn app_comments(id: Uuid) -> String {
        format!("app:{id}:comments")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        let id = Uuid::nil();
        assert_eq!(
            RedisKey::category(id),
            "category:00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            RedisKey::app_comments(id),
            "app:00000000-0000-0000-0000-000000000000:comments"
        );
        assert!(RedisKey::category_apps(id).starts_with(&RedisKey::category(id)));
    }
}
