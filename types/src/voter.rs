//! Voter identifier type.
//!
//! A voter ID is an opaque caller-supplied string. The ledger only ever
//! compares them for equality — there is no cryptographic binding between a
//! voter ID and a person.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque voter identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Partially masked rendering for public views: the first four characters
    /// are kept, the rest replaced with `*`.
    pub fn masked(&self) -> String {
        let visible: String = self.0.chars().take(4).collect();
        let hidden = self.0.chars().count().saturating_sub(4);
        format!("{}{}", visible, "*".repeat(hidden))
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoterId({})", self.masked())
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masking_keeps_first_four_chars() {
        assert_eq!(VoterId::new("voter-123").masked(), "vote*****");
        assert_eq!(VoterId::new("ab").masked(), "ab");
        assert_eq!(VoterId::new("abcd").masked(), "abcd");
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(VoterId::new("v1"), VoterId::from("v1"));
        assert_ne!(VoterId::new("v1"), VoterId::new("V1"));
    }
}
