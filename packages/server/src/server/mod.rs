pub mod app;
pub mod middleware;
pub mod routes;
pub mod validation;

pub use app::{build_app, AppState};
