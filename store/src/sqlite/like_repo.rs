//! SQLite-backed repository for post likes.

use sqlx::SqlitePool;
use tracing::debug;

use crate::traits::LikeRepository;
use crate::{PersistenceError, PostId, StudentId};

pub struct SqliteLikeRepository {
    pool: SqlitePool,
}

impl SqliteLikeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LikeRepository for SqliteLikeRepository {
    async fn like_post(&self, student: StudentId, post: PostId) -> Result<(), PersistenceError> {
        // Selecting the post row filters out group posts the student cannot see,
        // so "no row inserted" covers both a missing post and a hidden one.
        let result = sqlx::query(
            r#"
            INSERT INTO likes (student_id, post_id)
            SELECT ?, p.id
            FROM posts p
            WHERE p.id = ?
              AND (p.group_name IS NULL
                   OR EXISTS (SELECT 1 FROM memberships m
                              WHERE m.student_id = ? AND m.group_name = p.group_name))
            "#,
        )
        .bind(student)
        .bind(post)
        .bind(student)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(student_id = student, post_id = post, "Liked post");
        Ok(())
    }

    async fn unlike_post(&self, student: StudentId, post: PostId) -> Result<(), PersistenceError> {
        let result = sqlx::query("DELETE FROM likes WHERE student_id = ? AND post_id = ?")
            .bind(student)
            .bind(post)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(student_id = student, post_id = post, "Unliked post");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::{Database, SqlitePostRepository, SqliteStudentRepository};
    use crate::traits::{PostRepository, StudentRepository};
    use crate::{NewPost, Student};

    /// Students 1 (CS) and 9 (BIO); post 1 is public, post 11 is in CS.
    async fn test_db() -> (SqlitePostRepository, SqliteLikeRepository) {
        let db = Database::new_in_memory().await.unwrap();
        let students = SqliteStudentRepository::new(db.pool().clone());
        students.add_student(&Student::new(1, "Ada", "CS")).await.unwrap();
        students.add_student(&Student::new(9, "Ian", "BIO")).await.unwrap();

        let posts = SqlitePostRepository::new(db.pool().clone());
        for (id, group) in [(1, None), (11, Some("CS"))] {
            let post = NewPost {
                id,
                author: 1,
                text: format!("post {id}"),
                posted_at: 1_000,
            };
            posts.add_post(&post, group).await.unwrap();
        }
        let likes = SqliteLikeRepository::new(db.pool().clone());
        (posts, likes)
    }

    #[tokio::test]
    async fn test_like_and_unlike() {
        let (posts, likes) = test_db().await;
        likes.like_post(9, 1).await.unwrap();
        likes.like_post(1, 1).await.unwrap();
        assert_eq!(posts.get_post(1).await.unwrap().unwrap().likes, 2);

        likes.unlike_post(9, 1).await.unwrap();
        assert_eq!(posts.get_post(1).await.unwrap().unwrap().likes, 1);
    }

    #[tokio::test]
    async fn test_like_missing_student_or_post() {
        let (_posts, likes) = test_db().await;
        let no_student = likes.like_post(2, 1).await;
        assert!(matches!(no_student, Err(PersistenceError::NotExists)));
        let no_post = likes.like_post(1, 2).await;
        assert!(matches!(no_post, Err(PersistenceError::NotExists)));
    }

    #[tokio::test]
    async fn test_like_twice() {
        let (_posts, likes) = test_db().await;
        likes.like_post(1, 1).await.unwrap();
        let again = likes.like_post(1, 1).await;
        assert!(matches!(again, Err(PersistenceError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_like_group_post_requires_membership() {
        let (_posts, likes) = test_db().await;
        let outsider = likes.like_post(9, 11).await;
        assert!(matches!(outsider, Err(PersistenceError::NotExists)));
        likes.like_post(1, 11).await.unwrap();
    }

    #[tokio::test]
    async fn test_unlike_missing() {
        let (_posts, likes) = test_db().await;
        for (student, post) in [(2, 1), (1, 2), (1, 11)] {
            let result = likes.unlike_post(student, post).await;
            assert!(matches!(result, Err(PersistenceError::NotExists)));
        }
    }
}
