use crate::models::Post;
use sqlx::PgPool;

/// Insert a new post for `author_id` with the server clock as creation time.
/// Returns the created post.
pub async fn create_post(
    pool: &PgPool,
    author_id: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (author_id, content)
        VALUES ($1, $2)
        RETURNING id, author_id, content, created_at
        "#,
    )
    .bind(author_id)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Fetch the most recent posts across all authors.
/// Returns posts in descending order by creation date.
pub async fn find_recent_posts(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, content, created_at
        FROM posts
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Fetch the most recent posts by a single author.
pub async fn find_posts_by_author(
    pool: &PgPool,
    author_id: &str,
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, content, created_at
        FROM posts
        WHERE author_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(author_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}
