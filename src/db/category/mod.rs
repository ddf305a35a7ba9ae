pub mod get;
pub mod post;

pub use get::{get_category, list_categories};
pub use post::create_category;
