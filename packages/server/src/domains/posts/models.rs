use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Blog post authored by a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Insert a new post for `author_id`.
    pub async fn create(
        title: String,
        content: String,
        author_id: Uuid,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, content, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(title)
        .bind(content)
        .bind(author_id)
        .fetch_one(pool)
        .await
    }

    /// Update title and/or content by id.
    ///
    /// Absent fields keep their stored values. Returns `None` when no post
    /// has the given id.
    pub async fn update_content(
        id: Uuid,
        title: Option<String>,
        content: Option<String>,
        pool: &PgPool,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($1, title),
                content = COALESCE($2, content),
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Look up a single post by id.
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of posts, newest first.
    ///
    /// Ids are time-ordered v7 UUIDs, so `ORDER BY id DESC` is a stable
    /// newest-first sort even under concurrent inserts.
    pub async fn find_page(skip: i64, take: i64, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM posts
            ORDER BY id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(take)
        .fetch_all(pool)
        .await
    }

    /// Total number of posts.
    pub async fn count(pool: &PgPool) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }
}
