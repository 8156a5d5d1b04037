//! One async repository trait per aggregate of the social network.
//!
//! Implementations report constraint failures through [`PersistenceError`],
//! so any result maps onto a [`crate::ReturnCode`]. Signatures spell out
//! `impl Future + Send` to keep the futures spawnable on a multi-threaded
//! runtime.

use std::future::Future;

use crate::{Feed, Friendship, Membership, NewPost, PersistenceError, Post, PostId, Student};
use crate::{StudentId, StudentIdPair};

/// Student profiles and faculty changes.
///
/// Adding a student enrolls them in the group named after their faculty.
/// Deleting a student removes everything that references them.
pub trait StudentRepository: Send + Sync {
    fn add_student(
        &self,
        student: &Student,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn delete_student(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn get_student_profile(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, PersistenceError>> + Send;
    /// Move a student to `faculty`, joining its group while keeping the old
    /// faculty group membership.
    fn update_student_faculty(
        &self,
        id: StudentId,
        faculty: &str,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}

/// Posts, optionally published inside a group the author belongs to.
pub trait PostRepository: Send + Sync {
    fn add_post(
        &self,
        post: &NewPost,
        group: Option<&str>,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn delete_post(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn get_post(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<Post>, PersistenceError>> + Send;
    fn update_post_text(
        &self,
        id: PostId,
        text: &str,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}

/// Undirected friendships. Argument order never matters.
pub trait FriendshipRepository: Send + Sync {
    fn make_friends(
        &self,
        a: StudentId,
        b: StudentId,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn unfriend(
        &self,
        a: StudentId,
        b: StudentId,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn list_friendships(
        &self,
    ) -> impl Future<Output = Result<Vec<Friendship>, PersistenceError>> + Send;
}

/// Likes. A group post can only be liked by members of that group.
pub trait LikeRepository: Send + Sync {
    fn like_post(
        &self,
        student: StudentId,
        post: PostId,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn unlike_post(
        &self,
        student: StudentId,
        post: PostId,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
}

pub trait GroupRepository: Send + Sync {
    fn join_group(
        &self,
        student: StudentId,
        group: &str,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn leave_group(
        &self,
        student: StudentId,
        group: &str,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn list_memberships(
        &self,
    ) -> impl Future<Output = Result<Vec<Membership>, PersistenceError>> + Send;
    fn groups_of(
        &self,
        student: StudentId,
    ) -> impl Future<Output = Result<Vec<String>, PersistenceError>> + Send;
}

/// Read-only feeds, newest first with ties broken by like count.
pub trait FeedRepository: Send + Sync {
    /// Ungrouped posts by the student and by the student's friends.
    fn student_feed(
        &self,
        student: StudentId,
    ) -> impl Future<Output = Result<Feed, PersistenceError>> + Send;
    fn group_feed(
        &self,
        group: &str,
    ) -> impl Future<Output = Result<Feed, PersistenceError>> + Send;
}

/// Friendship-graph analytics over a consistent snapshot of the database.
pub trait SocialGraphRepository: Send + Sync {
    /// Friends of friends sharing a group with `student`, sorted by id.
    fn people_you_may_know(
        &self,
        student: StudentId,
    ) -> impl Future<Output = Result<Vec<Student>, PersistenceError>> + Send;
    /// Pairs at least five hops apart, sorted.
    fn remotely_connected_pairs(
        &self,
    ) -> impl Future<Output = Result<Vec<StudentIdPair>, PersistenceError>> + Send;
}
