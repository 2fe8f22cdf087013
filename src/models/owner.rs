use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// The identity an ownership check compares.
///
/// Holds the canonical textual form of a user reference: the lowercase,
/// hyphenated UUID when the input is a UUID in any of its textual encodings,
/// otherwise the trimmed, lowercased text. Two `OwnerId`s are equal exactly
/// when their canonical forms are equal, whatever representation they were
/// built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    /// Canonicalizes a textual user reference.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Uuid::parse_str(trimmed) {
            Ok(id) => Self::from(id),
            Err(_) => Self(trimmed.to_lowercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for OwnerId {
    fn from(id: Uuid) -> Self {
        Self(id.hyphenated().to_string())
    }
}

impl From<&Uuid> for OwnerId {
    fn from(id: &Uuid) -> Self {
        Self::from(*id)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for OwnerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
