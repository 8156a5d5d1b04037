//! All repositories over one database handle.

use super::{
    Database, SqliteFeedRepository, SqliteFriendshipRepository, SqliteGroupRepository,
    SqliteLikeRepository, SqlitePostRepository, SqliteSocialGraphRepository,
    SqliteStudentRepository,
};
use crate::SeparationPolicy;

/// Every SQLite repository, each holding a clone of the same pool.
pub struct Campus {
    pub students: SqliteStudentRepository,
    pub posts: SqlitePostRepository,
    pub friendships: SqliteFriendshipRepository,
    pub likes: SqliteLikeRepository,
    pub groups: SqliteGroupRepository,
    pub feeds: SqliteFeedRepository,
    pub social_graph: SqliteSocialGraphRepository,
}

impl Campus {
    pub fn new(db: &Database, policy: SeparationPolicy) -> Self {
        let pool = db.pool();
        Self {
            students: SqliteStudentRepository::new(pool.clone()),
            posts: SqlitePostRepository::new(pool.clone()),
            friendships: SqliteFriendshipRepository::new(pool.clone()),
            likes: SqliteLikeRepository::new(pool.clone()),
            groups: SqliteGroupRepository::new(pool.clone()),
            feeds: SqliteFeedRepository::new(pool.clone()),
            social_graph: SqliteSocialGraphRepository::new(pool.clone(), policy),
        }
    }
}
