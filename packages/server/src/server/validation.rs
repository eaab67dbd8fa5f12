//! Request body validation.
//!
//! Each inbound schema deserializes leniently (all fields optional) and is
//! checked by `validate()` before any handler side effect, so malformed
//! input never reaches the persistence layer. Failures map to 411, the
//! status existing API clients already handle for invalid input.

use serde::Deserialize;
use uuid::Uuid;

use crate::common::errors::ApiError;

fn require(field: &'static str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("{field} is required"))),
    }
}

/// Checked signup/signin payload.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /user/signup` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignupBody {
    pub fn validate(self) -> Result<Credentials, ApiError> {
        let email = require("email", self.email)?;
        if !email.contains('@') {
            return Err(ApiError::Validation(
                "email must be a valid email address".to_string(),
            ));
        }
        let password = require("password", self.password)?;
        Ok(Credentials { email, password })
    }
}

/// `POST /user/signin` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SigninBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SigninBody {
    pub fn validate(self) -> Result<Credentials, ApiError> {
        Ok(Credentials {
            email: require("email", self.email)?,
            password: require("password", self.password)?,
        })
    }
}

/// Checked create-post payload.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// `POST /blog` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostBody {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreatePostBody {
    pub fn validate(self) -> Result<NewPost, ApiError> {
        Ok(NewPost {
            title: require("title", self.title)?,
            content: require("content", self.content)?,
        })
    }
}

/// Checked update-post payload.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// `PUT /blog` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostBody {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostBody {
    pub fn validate(self) -> Result<PostPatch, ApiError> {
        let id = require("id", self.id)?;
        let id = Uuid::parse_str(&id)
            .map_err(|_| ApiError::Validation("id must be a valid post id".to_string()))?;

        // Both fields are optional; absent fields keep their stored values.
        // Provided fields must be non-empty.
        let title = self.title.map(|t| require("title", Some(t))).transpose()?;
        let content = self
            .content
            .map(|c| require("content", Some(c)))
            .transpose()?;

        Ok(PostPatch { id, title, content })
    }
}
