use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Registered account.
///
/// The password is stored only as a bcrypt hash and never serialized into
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Insert a new user.
    ///
    /// Ids are v7 UUIDs generated here rather than by the database so they
    /// stay time-ordered. Fails with a unique violation if the email is
    /// already registered; callers map that to a conflict.
    pub async fn create(email: String, password_hash: String, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Look up a user by email.
    pub async fn find_by_email(email: &str, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
