//! Friendship graph analytics for the campus social network.
//!
//! This crate is pure computation: callers hand it a snapshot of friendship
//! edges and group memberships and get back plain sets. Nothing here touches
//! a database, so results are reproducible and the functions are safe to call
//! from any number of threads.
//!
//! Two queries are provided:
//! - [`people_you_may_know`]: friends-of-friends that share a group with the
//!   student and are not already friends.
//! - [`remotely_connected_pairs`]: unordered student pairs at least
//!   [`REMOTE_DISTANCE`] hops apart.

pub mod graph;
pub mod groups;
pub mod separation;
pub mod suggestions;
pub mod types;

pub use graph::FriendshipGraph;
pub use groups::GroupIndex;
pub use separation::{
    remotely_connected_pairs, SeparationPolicy, UnknownSeparationPolicy, REMOTE_DISTANCE,
};
pub use suggestions::{people_you_may_know, suggest_friends};
pub use types::{Friendship, Membership, StudentId, StudentIdPair};
