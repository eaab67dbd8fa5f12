use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;
use uuid::Uuid;

use crate::common::errors::ApiError;
use crate::domains::auth::JwtService;
use crate::server::app::AppState;

/// Authenticated identity resolved by the credential gate.
///
/// Inserted into request extensions exactly once per request; handlers read
/// it via `Extension<AuthUser>` and never populate it themselves.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Credential gate for the post-management routes.
///
/// Extracts the token from the `authorization` header, verifies it, and
/// injects `AuthUser` into the request. A missing, invalid, or expired
/// token terminates the request with 401; no downstream handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&request, &state.jwt_service) {
        Some(user) => {
            debug!(user_id = %user.user_id, "authenticated request");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            debug!("no valid authentication token");
            ApiError::Unauthenticated.into_response()
        }
    }
}

/// Extract and verify the credential token from a request.
///
/// Tokens are accepted with or without the `Bearer ` prefix so the header
/// issued at signin can be echoed back verbatim.
fn authenticate(request: &Request<Body>, jwt_service: &JwtService) -> Option<AuthUser> {
    let header = request.headers().get("authorization")?;
    let value = header.to_str().ok()?;

    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    if token.is_empty() {
        return None;
    }

    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthUser {
        user_id: claims.sub,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_header(value: &str) -> Request<Body> {
        Request::builder()
            .header("authorization", value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = JwtService::new("test_secret");
        let user_id = Uuid::now_v7();
        let token = jwt_service.create_token(user_id).unwrap();

        let request = request_with_header(&format!("Bearer {}", token));

        let auth_user = authenticate(&request, &jwt_service);
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = JwtService::new("test_secret");
        let user_id = Uuid::now_v7();
        let token = jwt_service.create_token(user_id).unwrap();

        let request = request_with_header(&token);

        let auth_user = authenticate(&request, &jwt_service);
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_no_auth_header() {
        let jwt_service = JwtService::new("test_secret");
        let request = Request::builder().body(Body::empty()).unwrap();

        assert!(authenticate(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_empty_header() {
        let jwt_service = JwtService::new("test_secret");
        let request = request_with_header("");

        assert!(authenticate(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = JwtService::new("test_secret");
        let request = request_with_header("Bearer invalid_token");

        assert!(authenticate(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_token_from_other_secret() {
        let issuer = JwtService::new("other_secret");
        let verifier = JwtService::new("test_secret");
        let token = issuer.create_token(Uuid::now_v7()).unwrap();

        let request = request_with_header(&format!("Bearer {}", token));

        assert!(authenticate(&request, &verifier).is_none());
    }
}
