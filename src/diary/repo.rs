use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::Date;

use crate::dates::iso_date;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Diary {
    pub id: i64,
    pub user_id: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub title: String,
    pub content: String,
    pub one: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DiarySummary {
    pub id: i64,
    pub title: String,
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Diary {
    /// Insert an entry owned by `user_id`, returning the assigned id.
    pub async fn insert(
        db: &PgPool,
        user_id: &str,
        date: Date,
        title: &str,
        content: &str,
        one: Option<&str>,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO diaries (user_id, date, title, content, one)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(title)
        .bind(content)
        .bind(one)
        .fetch_one(db)
        .await
    }

    pub async fn list_by_owner(db: &PgPool, user_id: &str) -> sqlx::Result<Vec<DiarySummary>> {
        sqlx::query_as::<_, DiarySummary>(
            r#"
            SELECT id, title, date
            FROM diaries
            WHERE user_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Owner-filtered lookup: an entry belonging to someone else is
    /// indistinguishable from a missing one.
    pub async fn get(db: &PgPool, user_id: &str, id: i64) -> sqlx::Result<Option<Diary>> {
        sqlx::query_as::<_, Diary>(
            r#"
            SELECT id, user_id, date, title, content, one
            FROM diaries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, user_id: &str, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM diaries WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
