//! Undirected friendship graph and breadth-first distance helpers.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{Friendship, StudentId};

/// Undirected simple graph whose nodes are students and whose edges are
/// friendships.
///
/// Self loops are dropped and repeated edges collapse into one, so the
/// graph is simple no matter what the snapshot contains.
#[derive(Debug, Clone, Default)]
pub struct FriendshipGraph {
    adjacency: HashMap<StudentId, HashSet<StudentId>>,
}

impl FriendshipGraph {
    pub fn from_friendships<'a>(friendships: impl IntoIterator<Item = &'a Friendship>) -> Self {
        let mut graph = Self::default();
        for edge in friendships {
            graph.add_friendship(edge.first, edge.second);
        }
        graph
    }

    /// Add students that may have no friendships at all.
    pub fn with_students(mut self, students: impl IntoIterator<Item = StudentId>) -> Self {
        for student in students {
            self.adjacency.entry(student).or_default();
        }
        self
    }

    /// Returns `true` if the edge was new.
    pub fn add_friendship(&mut self, a: StudentId, b: StudentId) -> bool {
        if a == b {
            return false;
        }
        let inserted = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        inserted
    }

    pub fn friends(&self, student: StudentId) -> Option<&HashSet<StudentId>> {
        self.adjacency.get(&student)
    }

    pub fn are_friends(&self, a: StudentId, b: StudentId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|friends| friends.contains(&b))
    }

    pub fn contains(&self, student: StudentId) -> bool {
        self.adjacency.contains_key(&student)
    }

    pub fn students(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn student_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn friendship_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Hop distance from `start` to every student reachable within
    /// `max_depth` hops. `start` itself maps to 0; an unknown `start`
    /// yields an empty map.
    pub fn distances_within(&self, start: StudentId, max_depth: usize) -> HashMap<StudentId, usize> {
        let mut distances = HashMap::new();
        if !self.contains(start) {
            return distances;
        }

        let mut queue: VecDeque<(StudentId, usize)> = VecDeque::new();
        distances.insert(start, 0);
        queue.push_back((start, 0));

        while let Some((student, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            for &friend in &self.adjacency[&student] {
                if distances.contains_key(&friend) {
                    continue;
                }
                distances.insert(friend, depth + 1);
                queue.push_back((friend, depth + 1));
            }
        }

        distances
    }

    /// Shortest path length between two students, `None` when unreachable.
    pub fn distance(&self, a: StudentId, b: StudentId) -> Option<usize> {
        self.distances_within(a, usize::MAX).get(&b).copied()
    }

    /// Label every student with the index of its connected component.
    ///
    /// Labels are only meaningful for equality comparisons.
    pub fn components(&self) -> HashMap<StudentId, usize> {
        let mut labels: HashMap<StudentId, usize> = HashMap::with_capacity(self.adjacency.len());
        let mut next_label = 0;

        for &root in self.adjacency.keys() {
            if labels.contains_key(&root) {
                continue;
            }
            labels.insert(root, next_label);
            let mut queue = VecDeque::from([root]);
            while let Some(student) = queue.pop_front() {
                for &friend in &self.adjacency[&student] {
                    if labels.contains_key(&friend) {
                        continue;
                    }
                    labels.insert(friend, next_label);
                    queue.push_back(friend);
                }
            }
            next_label += 1;
        }

        labels
    }
}
