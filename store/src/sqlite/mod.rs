//! Repositories backed by SQLite.
//!
//! ## Connections
//!
//! [`Database`] owns a `sqlx::SqlitePool` opened in WAL mode with foreign
//! keys switched on, and applies `migrations/` through `sqlx::migrate!` on
//! open. Every reference in the schema cascades on delete.
//!
//! ## Repositories
//!
//! Each repository keeps its own clone of the pool:
//!
//! | Type | Trait |
//! |------|-------|
//! | [`SqliteStudentRepository`] | `StudentRepository` |
//! | [`SqlitePostRepository`] | `PostRepository` |
//! | [`SqliteFriendshipRepository`] | `FriendshipRepository` |
//! | [`SqliteLikeRepository`] | `LikeRepository` |
//! | [`SqliteGroupRepository`] | `GroupRepository` |
//! | [`SqliteFeedRepository`] | `FeedRepository` |
//! | [`SqliteSocialGraphRepository`] | `SocialGraphRepository` |
//!
//! [`Campus`] bundles all of them over one [`Database`].
//!
//! Friendships are stored as `(larger id, smaller id)`; the conversion and the
//! shared row types live in [`helpers`].

mod campus;
mod database;
mod feed_repo;
mod friendship_repo;
mod group_repo;
mod like_repo;
mod post_repo;
mod social_graph_repo;
mod student_repo;
pub(crate) mod helpers;

pub use campus::Campus;
pub use database::Database;
pub use feed_repo::SqliteFeedRepository;
pub use friendship_repo::SqliteFriendshipRepository;
pub use group_repo::SqliteGroupRepository;
pub use like_repo::SqliteLikeRepository;
pub use post_repo::SqlitePostRepository;
pub use social_graph_repo::SqliteSocialGraphRepository;
pub use student_repo::SqliteStudentRepository;
