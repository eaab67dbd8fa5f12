pub mod models;

pub use models::Post;
