pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_app, get_apps};
pub use patch::{push_comment, set_app_rating};
pub use post::create_app_in_category;
