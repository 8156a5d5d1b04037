//! Subcommand execution against an open [`Campus`].
//!
//! Queries print their result as JSON. Mutations print the flat result code
//! (`{"code": "NOT_EXISTS"}` and so on) instead of failing, so scripted
//! callers can branch on it.

use campus_store::sqlite::Campus;
use campus_store::traits::{
    FeedRepository, FriendshipRepository, GroupRepository, LikeRepository, PostRepository,
    SocialGraphRepository, StudentRepository,
};
use campus_store::{now_timestamp, NewPost, PersistenceError, ReturnCode, Student};
use clap::Subcommand;
use serde_json::{json, Value};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a student's profile (`null` if unknown).
    Profile { id: i64 },
    /// Show a post with its like count (`null` if unknown).
    Post { id: i64 },
    /// Public posts by a student and their friends, newest first.
    Feed { id: i64 },
    /// Posts published in a group, newest first.
    GroupFeed { group: String },
    /// Friends of friends who share a group with the student.
    MayKnow { id: i64 },
    /// Pairs of students at least five friendships apart.
    RemotePairs,
    /// Register a student; they join their faculty's group.
    AddStudent {
        id: i64,
        name: String,
        faculty: String,
    },
    /// Publish a post, optionally inside a group the author belongs to.
    AddPost {
        id: i64,
        author: i64,
        text: String,
        #[arg(short, long)]
        group: Option<String>,
    },
    MakeFriends { a: i64, b: i64 },
    JoinGroup { id: i64, group: String },
    Like { student: i64, post: i64 },
}

impl Command {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::AddStudent { .. }
                | Self::AddPost { .. }
                | Self::MakeFriends { .. }
                | Self::JoinGroup { .. }
                | Self::Like { .. }
        )
    }
}

fn code<T>(result: Result<T, PersistenceError>) -> Value {
    json!({ "code": ReturnCode::of(&result) })
}

/// Run `command` and return the JSON document to print.
///
/// Queries propagate database failures; mutations fold them into a code.
pub async fn execute(campus: &Campus, command: Command) -> Result<Value, PersistenceError> {
    let value = match command {
        Command::Profile { id } => json!(campus.students.get_student_profile(id).await?),
        Command::Post { id } => json!(campus.posts.get_post(id).await?),
        Command::Feed { id } => json!(campus.feeds.student_feed(id).await?),
        Command::GroupFeed { group } => json!(campus.feeds.group_feed(&group).await?),
        Command::MayKnow { id } => json!(campus.social_graph.people_you_may_know(id).await?),
        Command::RemotePairs => json!(campus.social_graph.remotely_connected_pairs().await?),
        Command::AddStudent { id, name, faculty } => {
            code(campus.students.add_student(&Student::new(id, name, faculty)).await)
        }
        Command::AddPost {
            id,
            author,
            text,
            group,
        } => {
            let post = NewPost {
                id,
                author,
                text,
                posted_at: now_timestamp(),
            };
            code(campus.posts.add_post(&post, group.as_deref()).await)
        }
        Command::MakeFriends { a, b } => code(campus.friendships.make_friends(a, b).await),
        Command::JoinGroup { id, group } => code(campus.groups.join_group(id, &group).await),
        Command::Like { student, post } => code(campus.likes.like_post(student, post).await),
    };
    Ok(value)
}
