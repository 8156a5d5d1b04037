//! SQLite-backed personal and group feeds.

use sqlx::SqlitePool;

use super::helpers::{PostRow, POST_COLUMNS};
use crate::traits::FeedRepository;
use crate::{Feed, PersistenceError, Post, StudentId};

/// SQLite implementation of [`FeedRepository`].
pub struct SqliteFeedRepository {
    pool: SqlitePool,
}

impl SqliteFeedRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FeedRepository for SqliteFeedRepository {
    async fn student_feed(&self, student: StudentId) -> Result<Feed, PersistenceError> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p LEFT JOIN likes l ON l.post_id = p.id
            WHERE p.group_name IS NULL
              AND (p.author = ?
                   OR EXISTS (SELECT 1 FROM friendships f
                              WHERE (f.id1 = p.author AND f.id2 = ?)
                                 OR (f.id2 = p.author AND f.id1 = ?)))
            GROUP BY p.id
            ORDER BY p.posted_at DESC, likes DESC
            "#
        );
        let rows: Vec<PostRow> = sqlx::query_as(&sql)
            .bind(student)
            .bind(student)
            .bind(student)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn group_feed(&self, group: &str) -> Result<Feed, PersistenceError> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p LEFT JOIN likes l ON l.post_id = p.id
            WHERE p.group_name = ?
            GROUP BY p.id
            ORDER BY p.posted_at DESC, likes DESC
            "#
        );
        let rows: Vec<PostRow> = sqlx::query_as(&sql)
            .bind(group)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}
