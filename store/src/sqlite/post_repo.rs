//! SQLite-backed implementation of [`PostRepository`].

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::{encode_timestamp, PostRow, POST_COLUMNS};
use crate::traits::PostRepository;
use crate::{NewPost, PersistenceError, Post, PostId};

pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PostRepository for SqlitePostRepository {
    async fn add_post(&self, post: &NewPost, group: Option<&str>) -> Result<(), PersistenceError> {
        // Only members may post into a group
        let result = sqlx::query(
            "INSERT INTO posts (id, author, text, posted_at, group_name) \
             SELECT ?, ?, ?, ?, ? \
             WHERE ? IS NULL OR EXISTS ( \
                 SELECT 1 FROM memberships WHERE group_name = ? AND student_id = ?)",
        )
        .bind(post.id)
        .bind(post.author)
        .bind(&post.text)
        .bind(encode_timestamp(post.posted_at))
        .bind(group)
        .bind(group)
        .bind(group)
        .bind(post.author)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(post_id = post.id, author = post.author, group, "Added post");
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), PersistenceError> {
        // Likes cascade
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(post_id = id, "Deleted post");
        Ok(())
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>, PersistenceError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} \
             FROM posts p LEFT JOIN likes l ON l.post_id = p.id \
             WHERE p.id = ? \
             GROUP BY p.id"
        );
        let row: Option<PostRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Post::from))
    }

    async fn update_post_text(&self, id: PostId, text: &str) -> Result<(), PersistenceError> {
        let result = sqlx::query("UPDATE posts SET text = ? WHERE id = ?")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(post_id = id, "Updated post text");
        Ok(())
    }
}
