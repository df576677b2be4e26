use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A rotation member, identified by a case-insensitive name.
///
/// `name` keeps the spelling it was first seen with; equality and hashing
/// only look at the lower-cased key.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub name: String,
}

impl Member {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }

    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_same(&self, other: &str) -> bool {
        self.key() == other.trim().to_lowercase()
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Member {
    fn from(name: &str) -> Self {
        Member::new(name)
    }
}
