use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub coin: i32,
}

impl User {
    /// Insert a new user. Returns `false` when the user id is already taken;
    /// the primary key is the authoritative duplicate guard, no row is
    /// overwritten.
    pub async fn create(
        db: &PgPool,
        name: &str,
        user_id: &str,
        password_hash: &str,
    ) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (user_id, name, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(password_hash)
        .execute(db)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Exact-match lookup by user id.
    pub async fn find(db: &PgPool, user_id: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, password_hash, coin
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Overwrite the stored password hash. The caller re-verifies the
    /// current password first; that is a business rule, not a store rule.
    pub async fn update_password(db: &PgPool, user_id: &str, new_hash: &str) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET password_hash = $2 WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(new_hash)
        .execute(db)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
