//! SQLite-backed repository for friendships.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::{friendship_key, load_friendships};
use crate::traits::FriendshipRepository;
use crate::{Friendship, PersistenceError, StudentId};

/// SQLite implementation of [`FriendshipRepository`].
pub struct SqliteFriendshipRepository {
    pool: SqlitePool,
}

impl SqliteFriendshipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FriendshipRepository for SqliteFriendshipRepository {
    async fn make_friends(&self, a: StudentId, b: StudentId) -> Result<(), PersistenceError> {
        let (id1, id2) = friendship_key(a, b);

        sqlx::query("INSERT INTO friendships (id1, id2) VALUES (?, ?)")
            .bind(id1)
            .bind(id2)
            .execute(&self.pool)
            .await?;

        debug!(id1, id2, "Added friendship");
        Ok(())
    }

    async fn unfriend(&self, a: StudentId, b: StudentId) -> Result<(), PersistenceError> {
        let (id1, id2) = friendship_key(a, b);

        let result = sqlx::query("DELETE FROM friendships WHERE id1 = ? AND id2 = ?")
            .bind(id1)
            .bind(id2)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(id1, id2, "Removed friendship");
        Ok(())
    }

    async fn list_friendships(&self) -> Result<Vec<Friendship>, PersistenceError> {
        let mut friendships = load_friendships(&self.pool).await?;
        friendships.sort_unstable();
        Ok(friendships)
    }
}
