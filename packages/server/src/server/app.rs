//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::middleware::require_auth;
use crate::server::routes::{blog, health, user};

/// Shared application state
///
/// Built once at startup; the pool and signing keys are read-only after
/// construction, so cloning per request is cheap and lock-free.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
///
/// Route layout mirrors the public API: `/api/v1/user` for credential
/// issuance, `/api/v1/blog` for post management (entire subtree behind the
/// credential gate), plus `/health`.
pub fn build_app(pool: PgPool, jwt_service: JwtService) -> Router {
    let state = AppState {
        db_pool: pool,
        jwt_service: Arc::new(jwt_service),
    };

    let user_routes = Router::new()
        .route("/signup", post(user::signup))
        .route("/signin", post(user::signin));

    // "/bulk" must be registered alongside "/:id"; axum prefers the static
    // segment, so listing is never captured as a post id.
    let blog_routes = Router::new()
        .route("/", post(blog::create_post).put(blog::update_post))
        .route("/bulk", get(blog::list_posts))
        .route("/:id", get(blog::get_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    // The authorization response header must be exposed for browser clients
    // to read the issued token.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([AUTHORIZATION]);

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1/user", user_routes)
        .nest("/api/v1/blog", blog_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
