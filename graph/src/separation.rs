//! Degrees of separation: pairs of students that are far apart in the
//! friendship graph.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::FriendshipGraph;
use crate::types::{Friendship, StudentIdPair};

/// Minimum shortest-path length for a pair to count as remotely connected.
pub const REMOTE_DISTANCE: usize = 5;

/// How pairs in different connected components are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparationPolicy {
    /// Only connected pairs qualify: the distance must be finite.
    #[default]
    #[serde(rename = "reachable", alias = "reachable-only")]
    ReachableOnly,
    /// Disconnected pairs count as infinitely far apart and qualify too.
    IncludeDisconnected,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown separation policy '{0}' (expected 'reachable' or 'include-disconnected')")]
pub struct UnknownSeparationPolicy(pub String);

impl FromStr for SeparationPolicy {
    type Err = UnknownSeparationPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reachable" | "reachable-only" => Ok(Self::ReachableOnly),
            "include-disconnected" | "disconnected" => Ok(Self::IncludeDisconnected),
            other => Err(UnknownSeparationPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for SeparationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReachableOnly => write!(f, "reachable"),
            Self::IncludeDisconnected => write!(f, "include-disconnected"),
        }
    }
}

/// Connected pairs at distance [`REMOTE_DISTANCE`] or more.
pub fn remotely_connected_pairs(friendships: &[Friendship]) -> BTreeSet<StudentIdPair> {
    FriendshipGraph::from_friendships(friendships).remote_pairs(SeparationPolicy::ReachableOnly)
}

impl FriendshipGraph {
    /// Every unordered pair whose distance is at least [`REMOTE_DISTANCE`],
    /// filtered by `policy`. Runs a BFS capped at `REMOTE_DISTANCE - 1` hops
    /// from each student; whatever it does not reach is far enough.
    pub fn remote_pairs(&self, policy: SeparationPolicy) -> BTreeSet<StudentIdPair> {
        let components = match policy {
            SeparationPolicy::ReachableOnly => Some(self.components()),
            SeparationPolicy::IncludeDisconnected => None,
        };

        let mut students: Vec<_> = self.students().collect();
        students.sort_unstable();

        let mut pairs = BTreeSet::new();
        for (i, &source) in students.iter().enumerate() {
            let near = self.distances_within(source, REMOTE_DISTANCE - 1);
            for &target in &students[i + 1..] {
                if near.contains_key(&target) {
                    continue;
                }
                if let Some(labels) = &components {
                    if labels.get(&source) != labels.get(&target) {
                        continue;
                    }
                }
                pairs.insert(StudentIdPair::new(source, target));
            }
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StudentId;

    fn edges(pairs: &[(StudentId, StudentId)]) -> Vec<Friendship> {
        pairs.iter().map(|&(a, b)| StudentIdPair::new(a, b)).collect()
    }

    #[test]
    fn path_of_six_edges() {
        let friendships = edges(&[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)]);
        let pairs = remotely_connected_pairs(&friendships);
        assert!(pairs.contains(&StudentIdPair::new(1, 7)));
        assert!(pairs.contains(&StudentIdPair::new(1, 6)));
        assert!(pairs.contains(&StudentIdPair::new(2, 7)));
        assert!(!pairs.contains(&StudentIdPair::new(1, 4)));
        assert!(!pairs.contains(&StudentIdPair::new(1, 5)));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn distance_four_is_not_remote() {
        let friendships = edges(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        assert!(remotely_connected_pairs(&friendships).is_empty());
    }

    #[test]
    fn campus_scenario() {
        // 7-6-1-2-3-4, 3-5, 5-4 and a separate 8-9
        let friendships = edges(&[(3, 4), (2, 1), (2, 3), (5, 4), (5, 3), (1, 6), (7, 6), (8, 9)]);
        let pairs = remotely_connected_pairs(&friendships);
        assert_eq!(
            pairs,
            BTreeSet::from([StudentIdPair::new(4, 7), StudentIdPair::new(5, 7)])
        );
    }

    #[test]
    fn include_disconnected_adds_cross_component_pairs() {
        let friendships = edges(&[(1, 2), (3, 4)]);
        let graph = FriendshipGraph::from_friendships(&friendships).with_students([5]);

        assert!(graph.remote_pairs(SeparationPolicy::ReachableOnly).is_empty());

        let pairs = graph.remote_pairs(SeparationPolicy::IncludeDisconnected);
        assert_eq!(pairs.len(), 8);
        assert!(pairs.contains(&StudentIdPair::new(1, 3)));
        assert!(pairs.contains(&StudentIdPair::new(2, 5)));
        assert!(!pairs.contains(&StudentIdPair::new(1, 2)));
        assert!(!pairs.contains(&StudentIdPair::new(3, 4)));
    }

    #[test]
    fn pairs_are_canonical() {
        let friendships = edges(&[(10, 9), (9, 8), (8, 7), (7, 6), (6, 5)]);
        for pair in remotely_connected_pairs(&friendships) {
            assert!(pair.first < pair.second);
        }
    }

    #[test]
    fn policy_parses_and_displays() {
        assert_eq!("reachable".parse(), Ok(SeparationPolicy::ReachableOnly));
        assert_eq!(
            " Include-Disconnected ".parse(),
            Ok(SeparationPolicy::IncludeDisconnected)
        );
        assert_eq!(
            "sometimes".parse::<SeparationPolicy>(),
            Err(UnknownSeparationPolicy("sometimes".to_string()))
        );
        assert_eq!(SeparationPolicy::IncludeDisconnected.to_string(), "include-disconnected");
        assert_eq!(SeparationPolicy::default(), SeparationPolicy::ReachableOnly);
    }

    #[test]
    fn policy_serde_matches_display() {
        for policy in [SeparationPolicy::ReachableOnly, SeparationPolicy::IncludeDisconnected] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{policy}\""));
            let back: SeparationPolicy = serde_json::from_str(&json).unwrap();
            assert_eq!(back, policy);
        }
        let legacy: SeparationPolicy = serde_json::from_str("\"reachable-only\"").unwrap();
        assert_eq!(legacy, SeparationPolicy::ReachableOnly);
    }
}
