//! SQLite-backed repository for student profiles.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::StudentRow;
use crate::traits::StudentRepository;
use crate::{PersistenceError, Student, StudentId};

/// SQLite implementation of [`StudentRepository`].
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StudentRepository for SqliteStudentRepository {
    async fn add_student(&self, student: &Student) -> Result<(), PersistenceError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO students (id, name, faculty) VALUES (?, ?, ?)")
            .bind(student.id)
            .bind(&student.name)
            .bind(&student.faculty)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO memberships (group_name, student_id) VALUES (?, ?)")
            .bind(&student.faculty)
            .bind(student.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(student_id = student.id, faculty = %student.faculty, "Added student");
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), PersistenceError> {
        // Memberships, posts, likes and friendships cascade
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotExists);
        }
        debug!(student_id = id, "Deleted student");
        Ok(())
    }

    async fn get_student_profile(&self, id: StudentId) -> Result<Option<Student>, PersistenceError> {
        let row: Option<StudentRow> =
            sqlx::query_as("SELECT id, name, faculty FROM students WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Student::from))
    }

    async fn update_student_faculty(
        &self,
        id: StudentId,
        faculty: &str,
    ) -> Result<(), PersistenceError> {
        let mut tx = self.pool.begin().await?;

        // Write first so the transaction holds the write lock from the start
        let updated = sqlx::query("UPDATE students SET faculty = ? WHERE id = ? AND faculty <> ?")
            .bind(faculty)
            .bind(id)
            .bind(faculty)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            let exists: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM students WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
            return Err(match exists {
                None => PersistenceError::NotExists,
                Some(_) => PersistenceError::AlreadyExists,
            });
        }

        // The student may already have joined this group by hand
        sqlx::query("INSERT OR IGNORE INTO memberships (group_name, student_id) VALUES (?, ?)")
            .bind(faculty)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(student_id = id, faculty, "Updated student faculty");
        Ok(())
    }
}
