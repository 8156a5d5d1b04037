//! Shared row types and encode/decode helpers for SQLite ↔ domain
//! conversions.

use sqlx::SqliteExecutor;

use crate::{Friendship, Membership, PersistenceError, Post, Student, StudentId, StudentIdPair};

// ── Timestamps ─────────────────────────────────────────────────────────

/// SQLite integers are signed; clamp timestamps that would not fit.
pub fn encode_timestamp(ts: u64) -> i64 {
    i64::try_from(ts).unwrap_or(i64::MAX)
}

pub fn decode_timestamp(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

// ── Friendships ────────────────────────────────────────────────────────

/// Column order for the `friendships` table: `(id1, id2)` with `id1 > id2`.
///
/// Equal ids are passed through unchanged so the table's CHECK rejects them.
pub fn friendship_key(a: StudentId, b: StudentId) -> (StudentId, StudentId) {
    (a.max(b), a.min(b))
}

// ── Rows ───────────────────────────────────────────────────────────────

#[derive(sqlx::FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub faculty: String,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            faculty: r.faculty,
        }
    }
}

/// Projection shared by every query returning posts. Must be followed by a
/// `FROM posts p LEFT JOIN likes l ON l.post_id = p.id` clause and grouped
/// by `p.id`.
pub const POST_COLUMNS: &str =
    "p.id, p.author, p.text, p.posted_at, p.group_name, COUNT(l.post_id) AS likes";

#[derive(sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub author: i64,
    pub text: String,
    pub posted_at: i64,
    pub group_name: Option<String>,
    pub likes: i64,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Self {
            id: r.id,
            author: r.author,
            text: r.text,
            posted_at: decode_timestamp(r.posted_at),
            group: r.group_name,
            likes: u32::try_from(r.likes).unwrap_or(u32::MAX),
        }
    }
}

// ── Snapshot loaders ───────────────────────────────────────────────────

pub async fn load_friendships<'e, E>(executor: E) -> Result<Vec<Friendship>, PersistenceError>
where
    E: SqliteExecutor<'e>,
{
    let rows: Vec<(i64, i64)> = sqlx::query_as("SELECT id1, id2 FROM friendships")
        .fetch_all(executor)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(id1, id2)| StudentIdPair::new(id1, id2))
        .collect())
}

pub async fn load_memberships<'e, E>(executor: E) -> Result<Vec<Membership>, PersistenceError>
where
    E: SqliteExecutor<'e>,
{
    let rows: Vec<(String, i64)> =
        sqlx::query_as("SELECT group_name, student_id FROM memberships")
            .fetch_all(executor)
            .await?;
    Ok(rows
        .into_iter()
        .map(|(group, student)| Membership { group, student })
        .collect())
}
