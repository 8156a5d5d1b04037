//! Friendship-graph analytics over a snapshot of the database.
//!
//! Both queries read every edge they need inside one transaction and then
//! run the in-memory algorithms from [`social_graph`].

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use social_graph::FriendshipGraph;

use super::helpers::{load_friendships, load_memberships, StudentRow};
use crate::traits::SocialGraphRepository;
use crate::{PersistenceError, SeparationPolicy, Student, StudentId, StudentIdPair};

/// SQLite implementation of [`SocialGraphRepository`].
pub struct SqliteSocialGraphRepository {
    pool: SqlitePool,
    policy: SeparationPolicy,
}

impl SqliteSocialGraphRepository {
    pub fn new(pool: SqlitePool, policy: SeparationPolicy) -> Self {
        Self { pool, policy }
    }

    pub fn policy(&self) -> SeparationPolicy {
        self.policy
    }
}

impl SocialGraphRepository for SqliteSocialGraphRepository {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn people_you_may_know(
        &self,
        student: StudentId,
    ) -> Result<Vec<Student>, PersistenceError> {
        let mut tx = self.pool.begin().await?;
        let friendships = load_friendships(&mut *tx).await?;
        let memberships = load_memberships(&mut *tx).await?;

        let ids = social_graph::people_you_may_know(student, &friendships, &memberships);
        debug!(
            friendships = friendships.len(),
            memberships = memberships.len(),
            suggestions = ids.len(),
            "Computed suggestions"
        );
        if ids.is_empty() {
            tx.commit().await?;
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name, faculty FROM students WHERE id IN (");
        let mut separated = query.separated(", ");
        for id in &ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let rows: Vec<StudentRow> = query.build_query_as().fetch_all(&mut *tx).await?;
        tx.commit().await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    #[tracing::instrument(level = "debug", skip(self), fields(policy = %self.policy))]
    async fn remotely_connected_pairs(&self) -> Result<Vec<StudentIdPair>, PersistenceError> {
        let mut tx = self.pool.begin().await?;
        let friendships = load_friendships(&mut *tx).await?;

        let mut graph = FriendshipGraph::from_friendships(&friendships);
        if self.policy == SeparationPolicy::IncludeDisconnected {
            let ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM students")
                .fetch_all(&mut *tx)
                .await?;
            graph = graph.with_students(ids.into_iter().map(|(id,)| id));
        }
        tx.commit().await?;

        let pairs: Vec<StudentIdPair> = graph.remote_pairs(self.policy).into_iter().collect();
        debug!(
            students = graph.student_count(),
            friendships = graph.friendship_count(),
            pairs = pairs.len(),
            "Computed remote pairs"
        );
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::{
        Database, SqliteFriendshipRepository, SqliteGroupRepository, SqliteStudentRepository,
    };
    use crate::traits::{FriendshipRepository, GroupRepository, StudentRepository};

    struct Fixture {
        db: Database,
        students: SqliteStudentRepository,
        friends: SqliteFriendshipRepository,
        groups: SqliteGroupRepository,
    }

    /// Students 1..=`count`, all in the faculty `faculty(id)`.
    async fn fixture(count: i64, faculty: fn(i64) -> &'static str) -> Fixture {
        let db = Database::new_in_memory().await.unwrap();
        let students = SqliteStudentRepository::new(db.pool().clone());
        for id in 1..=count {
            students
                .add_student(&Student::new(id, format!("student {id}"), faculty(id)))
                .await
                .unwrap();
        }
        Fixture {
            friends: SqliteFriendshipRepository::new(db.pool().clone()),
            groups: SqliteGroupRepository::new(db.pool().clone()),
            students,
            db,
        }
    }

    impl Fixture {
        fn analytics(&self, policy: SeparationPolicy) -> SqliteSocialGraphRepository {
            SqliteSocialGraphRepository::new(self.db.pool().clone(), policy)
        }

        async fn befriend(&self, edges: &[(StudentId, StudentId)]) {
            for &(a, b) in edges {
                self.friends.make_friends(a, b).await.unwrap();
            }
        }
    }

    fn ids(students: &[Student]) -> Vec<StudentId> {
        students.iter().map(|s| s.id).collect()
    }

    #[tokio::test]
    async fn test_may_know_requires_shared_group() {
        // 1 and 3 are in CS, 2 is in MATH
        let f = fixture(3, |id| if id == 2 { "MATH" } else { "CS" }).await;
        f.befriend(&[(1, 2), (2, 3)]).await;
        let analytics = f.analytics(SeparationPolicy::default());

        let suggested = analytics.people_you_may_know(1).await.unwrap();
        assert_eq!(ids(&suggested), vec![3]);
        assert_eq!(suggested[0].name, "student 3");

        // Every friend-of-a-friend of 2 is 2 itself
        assert!(analytics.people_you_may_know(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_may_know_follows_group_changes() {
        let f = fixture(3, |id| ["CS", "MATH", "BIO"][(id - 1) as usize]).await;
        f.befriend(&[(1, 2), (2, 3)]).await;
        let analytics = f.analytics(SeparationPolicy::default());
        assert!(analytics.people_you_may_know(1).await.unwrap().is_empty());

        f.groups.join_group(3, "CS").await.unwrap();
        assert_eq!(ids(&analytics.people_you_may_know(1).await.unwrap()), vec![3]);

        f.friends.make_friends(1, 3).await.unwrap();
        assert!(analytics.people_you_may_know(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_may_know_unknown_or_friendless_student() {
        let f = fixture(2, |_| "CS").await;
        let analytics = f.analytics(SeparationPolicy::default());
        assert!(analytics.people_you_may_know(1).await.unwrap().is_empty());
        assert!(analytics.people_you_may_know(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remote_pairs_on_a_path() {
        let f = fixture(7, |_| "CS").await;
        f.befriend(&[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)]).await;

        let pairs = f
            .analytics(SeparationPolicy::ReachableOnly)
            .remotely_connected_pairs()
            .await
            .unwrap();
        assert_eq!(
            pairs,
            vec![
                StudentIdPair::new(1, 6),
                StudentIdPair::new(1, 7),
                StudentIdPair::new(2, 7),
            ]
        );
    }

    #[tokio::test]
    async fn test_remote_pairs_policy() {
        let f = fixture(3, |_| "CS").await;
        f.befriend(&[(1, 2)]).await;

        let reachable = f.analytics(SeparationPolicy::ReachableOnly);
        assert!(reachable.remotely_connected_pairs().await.unwrap().is_empty());

        // Student 3 has no friendships but is still a student
        let disconnected = f.analytics(SeparationPolicy::IncludeDisconnected);
        assert_eq!(disconnected.policy(), SeparationPolicy::IncludeDisconnected);
        assert_eq!(
            disconnected.remotely_connected_pairs().await.unwrap(),
            vec![StudentIdPair::new(1, 3), StudentIdPair::new(2, 3)]
        );

        f.students.delete_student(3).await.unwrap();
        assert!(disconnected.remotely_connected_pairs().await.unwrap().is_empty());
    }
}
