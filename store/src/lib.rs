//! SQLite data-access layer for the campus social network.
//!
//! Students, group memberships, friendships, posts and likes live in SQLite
//! behind one async repository trait per aggregate (see [`traits`]). Every
//! write is a parameterized statement whose constraint failures come back as
//! [`PersistenceError`] variants, and [`ReturnCode`] flattens any result into
//! the `OK / NOT_EXISTS / ALREADY_EXISTS / BAD_PARAMS / ERROR` taxonomy.
//!
//! Friend suggestions and degrees-of-separation queries load a snapshot of
//! the friendship graph and hand it to [`social_graph`].

mod error;
mod models;
pub mod sqlite;
pub mod traits;

pub use error::{PersistenceError, ReturnCode};
pub use models::{Feed, NewPost, Post, PostId, Student};
pub use social_graph::{
    Friendship, Membership, SeparationPolicy, StudentId, StudentIdPair, UnknownSeparationPolicy,
};

use std::time::{SystemTime, UNIX_EPOCH};

/// Get the current unix timestamp in seconds.
pub fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
