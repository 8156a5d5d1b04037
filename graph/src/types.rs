use serde::{Deserialize, Serialize};

/// Student identifier as stored by the data layer.
pub type StudentId = i64;

/// Unordered pair of student ids, normalized so that `first <= second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawPair")]
pub struct StudentIdPair {
    pub first: StudentId,
    pub second: StudentId,
}

#[derive(Deserialize)]
struct RawPair {
    first: StudentId,
    second: StudentId,
}

impl From<RawPair> for StudentIdPair {
    fn from(raw: RawPair) -> Self {
        Self::new(raw.first, raw.second)
    }
}

impl StudentIdPair {
    pub fn new(a: StudentId, b: StudentId) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.first == id || self.second == id
    }

    /// Both ends name the same student.
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }
}

/// An undirected friendship edge.
pub type Friendship = StudentIdPair;

/// A student's membership in a named group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Membership {
    pub group: String,
    pub student: StudentId,
}

impl Membership {
    pub fn new(group: impl Into<String>, student: StudentId) -> Self {
        Self {
            group: group.into(),
            student,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_normalized() {
        assert_eq!(StudentIdPair::new(7, 4), StudentIdPair { first: 4, second: 7 });
        assert_eq!(StudentIdPair::new(4, 7), StudentIdPair::new(7, 4));
    }

    #[test]
    fn pair_contains_and_loop() {
        let pair = StudentIdPair::new(2, 9);
        assert!(pair.contains(2));
        assert!(pair.contains(9));
        assert!(!pair.contains(3));
        assert!(!pair.is_loop());
        assert!(StudentIdPair::new(5, 5).is_loop());
    }

    #[test]
    fn pair_serializes_as_object() {
        let json = serde_json::to_string(&StudentIdPair::new(9, 1)).unwrap();
        assert_eq!(json, r#"{"first":1,"second":9}"#);
    }

    #[test]
    fn pair_deserializes_normalized() {
        let pair: StudentIdPair = serde_json::from_str(r#"{"first":9,"second":1}"#).unwrap();
        assert_eq!(pair, StudentIdPair::new(1, 9));
        assert_eq!(pair.first, 1);
    }
}
