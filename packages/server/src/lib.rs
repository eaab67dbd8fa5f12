// Blog API - server core
//
// Backend API for a small blogging platform: users sign up and sign in with
// JWT credentials, then create, update, and read posts. Listings are
// paginated with a stable newest-first ordering.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
