use sqlx::PgPool;

use super::types::Talk;

const SELECT_TALK_BY_ID: &str = "\
    SELECT id, twitter_username, title, summary, timezone \
    FROM talks WHERE id = $1";

/// Insert a talk and return its new id.
pub async fn insert(pool: &PgPool, talk: &Talk) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO talks (twitter_username, title, summary, timezone) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&talk.twitter_username)
    .bind(&talk.title)
    .bind(&talk.summary)
    .bind(&talk.timezone)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Find a talk by id.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Talk>, sqlx::Error> {
    sqlx::query_as::<_, Talk>(SELECT_TALK_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await
}
