pub mod errors;
pub mod pagination;

pub use errors::ApiError;
