pub mod app;
pub mod category;
pub mod redis;

pub use app::{App, Comment};
pub use category::{Category, PopulatedCategory};
