//! Credential issuance and verification.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService};
