//! "People you may know": friends of friends who share a group.

use std::collections::BTreeSet;

use crate::graph::FriendshipGraph;
use crate::groups::GroupIndex;
use crate::types::{Friendship, Membership, StudentId};

/// Students `student` may know, computed over a raw snapshot.
///
/// A student `x` qualifies when `x` is not `student`, is not already a
/// friend, is a friend of one of `student`'s friends, and shares at least
/// one group with `student`. An unknown or friendless student yields an
/// empty set.
pub fn people_you_may_know(
    student: StudentId,
    friendships: &[Friendship],
    memberships: &[Membership],
) -> BTreeSet<StudentId> {
    let graph = FriendshipGraph::from_friendships(friendships);
    let groups = GroupIndex::from_memberships(memberships);
    suggest_friends(&graph, &groups, student)
}

/// Same as [`people_you_may_know`] over prebuilt indexes.
pub fn suggest_friends(
    graph: &FriendshipGraph,
    groups: &GroupIndex,
    student: StudentId,
) -> BTreeSet<StudentId> {
    let Some(friends) = graph.friends(student) else {
        return BTreeSet::new();
    };

    friends
        .iter()
        .filter_map(|&mutual| graph.friends(mutual))
        .flatten()
        .copied()
        .filter(|&candidate| candidate != student && !friends.contains(&candidate))
        .filter(|&candidate| groups.share_group(student, candidate))
        .collect()
}
