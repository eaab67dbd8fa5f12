//! Post-management handlers.
//!
//! Every route here sits behind the credential gate; `author_id` comes
//! exclusively from the resolved `AuthUser`, never from the request body.

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::errors::ApiError;
use crate::common::pagination::{paginate, PageInfo, PageRequest};
use crate::domains::posts::Post;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;
use crate::server::validation::{CreatePostBody, UpdatePostBody};

/// POST /api/v1/blog
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreatePostBody>,
) -> Result<Json<Value>, ApiError> {
    let input = body.validate()?;

    let post = Post::create(input.title, input.content, user.user_id, &state.db_pool)
        .await
        .map_err(anyhow::Error::new)?;

    tracing::info!(post_id = %post.id, author_id = %user.user_id, "post created");

    Ok(Json(json!({ "id": post.id })))
}

/// PUT /api/v1/blog
pub async fn update_post(
    State(state): State<AppState>,
    Json(body): Json<UpdatePostBody>,
) -> Result<Json<Value>, ApiError> {
    let patch = body.validate()?;

    let post = Post::update_content(patch.id, patch.title, patch.content, &state.db_pool)
        .await
        .map_err(anyhow::Error::new)?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    Ok(Json(json!({ "post": post })))
}

/// GET /api/v1/blog/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    // A malformed id cannot reference any post.
    let id =
        Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("Post not found".to_string()))?;

    let post = Post::find_by_id(id, &state.db_pool)
        .await
        .map_err(anyhow::Error::new)?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    Ok(Json(json!({ "post": post })))
}

/// GET /api/v1/blog/bulk?page=&limit=
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PageRequest>,
) -> Result<Json<Value>, ApiError> {
    let (page, limit) = query.normalize();

    let total_count = Post::count(&state.db_pool)
        .await
        .map_err(anyhow::Error::new)?;
    let window = paginate(page, limit, total_count);

    let posts = Post::find_page(window.skip, window.take, &state.db_pool)
        .await
        .map_err(anyhow::Error::new)?;

    Ok(Json(json!({
        "posts": posts,
        "pagination": PageInfo::from(&window),
    })))
}
