use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// Catalog entry; read-only reference data seeded by migration.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sticker {
    pub sticker_id: i64,
    pub name: String,
    pub image_url: String,
    pub price: i32,
}

pub async fn exists(db: &PgPool, sticker_id: i64) -> sqlx::Result<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT sticker_id FROM stickers WHERE sticker_id = $1
        "#,
    )
    .bind(sticker_id)
    .fetch_optional(db)
    .await?;
    Ok(found.is_some())
}

pub async fn is_owned(db: &PgPool, user_id: &str, sticker_id: i64) -> sqlx::Result<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT sticker_id FROM user_stickers WHERE user_id = $1 AND sticker_id = $2
        "#,
    )
    .bind(user_id)
    .bind(sticker_id)
    .fetch_optional(db)
    .await?;
    Ok(found.is_some())
}

/// Record ownership. The composite primary key is the authoritative guard
/// against duplicate purchases; `false` means the pair already existed.
pub async fn grant(db: &PgPool, user_id: &str, sticker_id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO user_stickers (user_id, sticker_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, sticker_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(sticker_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn list_owned(db: &PgPool, user_id: &str) -> sqlx::Result<Vec<Sticker>> {
    sqlx::query_as::<_, Sticker>(
        r#"
        SELECT s.sticker_id, s.name, s.image_url, s.price
        FROM user_stickers us
        JOIN stickers s ON s.sticker_id = us.sticker_id
        WHERE us.user_id = $1
        ORDER BY s.sticker_id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
