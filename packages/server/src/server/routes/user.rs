//! Signup and signin handlers.
//!
//! Both issue a credential token in the `authorization` response header on
//! success; the body carries only a status message.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::common::errors::ApiError;
use crate::domains::auth::password;
use crate::domains::users::User;
use crate::server::app::AppState;
use crate::server::validation::{SigninBody, SignupBody};

/// POST /api/v1/user/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<Response, ApiError> {
    let creds = body.validate()?;

    let password_hash = password::hash_password(&creds.password)?;

    let user = match User::create(creds.email, password_hash, &state.db_pool).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict("Email is already registered".to_string()))
        }
        Err(e) => return Err(anyhow::Error::new(e).into()),
    };

    tracing::info!(user_id = %user.id, "user registered");

    let token = state.jwt_service.create_token(user.id)?;
    authorized_response(&token, "Registration successful")
}

/// POST /api/v1/user/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SigninBody>,
) -> Result<Response, ApiError> {
    let creds = body.validate()?;

    let user = User::find_by_email(&creds.email, &state.db_pool)
        .await
        .map_err(anyhow::Error::new)?
        .ok_or(ApiError::UserNotFound)?;

    if !password::verify_password(&creds.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_service.create_token(user.id)?;
    authorized_response(&token, "Authentication successful")
}

/// Build a 200 response carrying the issued token.
///
/// The header value is `Bearer <token>`; the gate accepts it with or
/// without the prefix, so clients may echo it back as-is.
fn authorized_response(token: &str, message: &str) -> Result<Response, ApiError> {
    let value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| ApiError::Internal(e.into()))?;

    let mut response = Json(json!({ "message": message })).into_response();
    response.headers_mut().insert(AUTHORIZATION, value);
    Ok(response)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_authorized_response_carries_bearer_header() {
        let response = authorized_response("abc.def.ghi", "ok").unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer abc.def.ghi");
    }
}
