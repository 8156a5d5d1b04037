//! SQLite-backed repository for group memberships.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::load_memberships;
use crate::traits::GroupRepository;
use crate::{Membership, PersistenceError, StudentId};

/// SQLite implementation of [`GroupRepository`].
pub struct SqliteGroupRepository {
    pool: SqlitePool,
}

impl SqliteGroupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl GroupRepository for SqliteGroupRepository {
    async fn join_group(&self, student: StudentId, group: &str) -> Result<(), PersistenceError> {
        sqlx::query("INSERT INTO memberships (group_name, student_id) VALUES (?, ?)")
            .bind(group)
            .bind(student)
            .execute(&self.pool)
            .await?;

        debug!(student_id = student, group, "Joined group");
        Ok(())
    }

    async fn leave_group(&self, student: StudentId, group: &str) -> Result<(), PersistenceError> {
        let result = sqlx::query("DELETE FROM memberships WHERE group_name = ? AND student_id = ?")
            .bind(group)
            .bind(student)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(student_id = student, group, "Left group");
        Ok(())
    }

    async fn list_memberships(&self) -> Result<Vec<Membership>, PersistenceError> {
        load_memberships(&self.pool).await
    }

    async fn groups_of(&self, student: StudentId) -> Result<Vec<String>, PersistenceError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT group_name FROM memberships WHERE student_id = ? ORDER BY group_name",
        )
        .bind(student)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(group,)| group).collect())
    }
}
