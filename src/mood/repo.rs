use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::Date;

use crate::dates::iso_date;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Mood {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub color: String,
}

/// Insert-or-overwrite keyed on `(user_id, date)`. The composite primary key
/// makes the upsert the authoritative guard against duplicate day rows; an
/// already-attached sticker survives a color change.
pub async fn set_color(db: &PgPool, user_id: &str, date: Date, color: &str) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO moods (user_id, date, color)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, date) DO UPDATE SET color = EXCLUDED.color
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(color)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn get_color(db: &PgPool, user_id: &str, date: Date) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT color FROM moods WHERE user_id = $1 AND date = $2
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_optional(db)
    .await
}

pub async fn range(db: &PgPool, user_id: &str, start: Date, end: Date) -> sqlx::Result<Vec<Mood>> {
    sqlx::query_as::<_, Mood>(
        r#"
        SELECT date, color
        FROM moods
        WHERE user_id = $1 AND date BETWEEN $2 AND $3
        ORDER BY date
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

/// Attach a sticker to an existing mood day. Zero rows means no mood has
/// been recorded for that date yet.
pub async fn attach_sticker(
    db: &PgPool,
    user_id: &str,
    date: Date,
    sticker_id: i64,
) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE moods SET sticker_id = $3 WHERE user_id = $1 AND date = $2
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(sticker_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
