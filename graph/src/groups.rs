//! Group membership lookup used by the friend suggestions.

use std::collections::{HashMap, HashSet};

use crate::types::{Membership, StudentId};

/// Maps each student to the set of group names they belong to.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    by_student: HashMap<StudentId, HashSet<String>>,
}

impl GroupIndex {
    pub fn from_memberships<'a>(memberships: impl IntoIterator<Item = &'a Membership>) -> Self {
        let mut index = Self::default();
        for membership in memberships {
            index.insert(membership.student, &membership.group);
        }
        index
    }

    pub fn insert(&mut self, student: StudentId, group: &str) -> bool {
        self.by_student
            .entry(student)
            .or_default()
            .insert(group.to_string())
    }

    /// Groups of `student`, empty when the student has none.
    pub fn groups_of(&self, student: StudentId) -> impl Iterator<Item = &str> + '_ {
        self.by_student
            .get(&student)
            .into_iter()
            .flat_map(|groups| groups.iter().map(String::as_str))
    }

    pub fn is_member(&self, student: StudentId, group: &str) -> bool {
        self.by_student
            .get(&student)
            .is_some_and(|groups| groups.contains(group))
    }

    /// Whether `a` and `b` have at least one group name in common.
    pub fn share_group(&self, a: StudentId, b: StudentId) -> bool {
        let (Some(ga), Some(gb)) = (self.by_student.get(&a), self.by_student.get(&b)) else {
            return false;
        };
        let (small, large) = if ga.len() <= gb.len() { (ga, gb) } else { (gb, ga) };
        small.iter().any(|group| large.contains(group))
    }
}
