use serde::{Deserialize, Serialize};
use social_graph::StudentId;

pub type PostId = i64;

/// A student profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Also the name of the group the student is enrolled in automatically.
    pub faculty: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, faculty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            faculty: faculty.into(),
        }
    }
}

/// A post as submitted by its author. The target group, if any, is passed
/// separately to `add_post`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub id: PostId,
    pub author: StudentId,
    pub text: String,
    /// Unix timestamp in seconds.
    pub posted_at: u64,
}

/// A stored post together with its like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: StudentId,
    pub text: String,
    pub posted_at: u64,
    pub group: Option<String>,
    pub likes: u32,
}

/// Posts ordered newest first, then most liked first.
pub type Feed = Vec<Post>;
