//! Core domain types for the social graph.
//!
//! People are stored as `Person` nodes and friendships as directed
//! `FRIEND_OF` relationships between them.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Person ────────────────────────────────────────────────────────

/// Identifier of a person node, assigned by the graph store on creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(PersonId)
    }
}

/// The attributes of a person to be created. Identity is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub age: i64,
    pub location: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, age: i64, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            location: location.into(),
        }
    }
}

/// A row returned by people and friend listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
}

impl PersonSummary {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ── Friendship ────────────────────────────────────────────────────

/// A directed friendship edge. `from` considers `to` a friend; nothing
/// implies the reverse edge exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Friendship {
    pub from: PersonId,
    pub to: PersonId,
}

impl Friendship {
    /// Whether this edge touches the given person at either end.
    pub fn touches(&self, id: PersonId) -> bool {
        self.from == id || self.to == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_parses_trimmed_input() {
        assert_eq!(" 42 \n".parse::<PersonId>().unwrap(), PersonId(42));
        assert_eq!("-3".parse::<PersonId>().unwrap(), PersonId(-3));
        assert!("abc".parse::<PersonId>().is_err());
        assert!("".parse::<PersonId>().is_err());
    }

    #[test]
    fn test_person_id_display() {
        assert_eq!(PersonId(7).to_string(), "7");
    }

    #[test]
    fn test_friendship_touches_both_ends() {
        let edge = Friendship {
            from: PersonId(1),
            to: PersonId(2),
        };
        assert!(edge.touches(PersonId(1)));
        assert!(edge.touches(PersonId(2)));
        assert!(!edge.touches(PersonId(3)));
    }
}
